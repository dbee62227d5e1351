use crate::io::{Format, error::Error};
use crate::model::{
    atom::Atom,
    metadata::CompoundInfo,
    molecule::{Bond, Molecule},
};
use std::io::BufRead;
use std::ops::Range;

const X_FIELD: Range<usize> = 0..10;
const Y_FIELD: Range<usize> = 10..20;
const Z_FIELD: Range<usize> = 20..30;
const SYMBOL_FIELD: Range<usize> = 31..34;

const AROMATIC_ORDER: u8 = 4;

pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let lines = collect_first_block(reader)?;
    if lines.len() < 4 {
        return Err(Error::parse(
            Format::Sdf,
            1,
            "SDF block must contain at least a header and counts line",
        ));
    }

    let counts_line_no = lines[3].0;
    let counts_line = &lines[3].1;
    if counts_line.contains("V3000") {
        return Err(Error::parse(
            Format::Sdf,
            counts_line_no,
            "V3000 is not supported",
        ));
    }

    let (atom_count, bond_count) = parse_counts(counts_line, counts_line_no)?;
    let atom_start = 4;
    let bond_start = atom_start + atom_count;
    let bond_end = bond_start + bond_count;

    if lines.len() < bond_end {
        return Err(Error::parse(
            Format::Sdf,
            lines.last().map(|(ln, _)| *ln).unwrap_or(counts_line_no),
            "SDF block ended before atoms/bonds were fully specified",
        ));
    }

    let atoms = parse_atoms(&lines[atom_start..bond_start])?;
    let bonds = parse_bonds(&lines[bond_start..bond_end], atom_count)?;
    let items = parse_data_items(&lines[bond_end..]);
    let info = compound_info(lines[0].1.trim(), items);

    log::debug!(
        "read SDF record with {} atoms and {} bonds",
        atoms.len(),
        bonds.len()
    );

    Ok(Molecule {
        atoms,
        bonds,
        atoms_2d: None,
        info,
    })
}

fn collect_first_block<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let content = line.map_err(|e| Error::Io { source: e })?;
        let ln = i + 1;
        if content.trim() == "$$$$" {
            break;
        }
        lines.push((ln, content));
    }
    Ok(lines)
}

fn parse_counts(line: &str, line_no: usize) -> Result<(usize, usize), Error> {
    let padded = format!("{line:<6}");
    let field = |range: Range<usize>, what: &str| {
        padded
            .get(range)
            .and_then(|s| s.trim().parse::<usize>().ok())
            .ok_or_else(|| Error::parse(Format::Sdf, line_no, format!("invalid {what} count")))
    };
    Ok((field(0..3, "atom")?, field(3..6, "bond")?))
}

fn fixed_field<'a>(line: &'a str, range: Range<usize>, ln: usize) -> Result<&'a str, Error> {
    line.get(range)
        .map(str::trim)
        .ok_or_else(|| Error::parse(Format::Sdf, ln, "atom line is not plain fixed-width text"))
}

fn parse_atoms(lines: &[(usize, String)]) -> Result<Vec<Atom>, Error> {
    let mut atoms = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        let padded = format!("{raw:<34}");
        let coord = |range: Range<usize>, axis: char| -> Result<f64, Error> {
            fixed_field(&padded, range, *ln)?.parse::<f64>().map_err(|_| {
                Error::parse(
                    Format::Sdf,
                    *ln,
                    format!("invalid {axis} coordinate in atom line"),
                )
            })
        };
        let position = [coord(X_FIELD, 'x')?, coord(Y_FIELD, 'y')?, coord(Z_FIELD, 'z')?];

        let symbol = fixed_field(&padded, SYMBOL_FIELD, *ln)?;
        if symbol.is_empty() {
            return Err(Error::parse(
                Format::Sdf,
                *ln,
                "missing element symbol in atom line",
            ));
        }
        atoms.push(Atom::new(symbol, position));
    }
    Ok(atoms)
}

fn parse_bonds(lines: &[(usize, String)], atom_count: usize) -> Result<Vec<Bond>, Error> {
    let mut bonds = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        let padded = format!("{raw:<9}");
        let field = |range: Range<usize>, what: &str| {
            padded
                .get(range)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .ok_or_else(|| Error::parse(Format::Sdf, *ln, format!("invalid {what}")))
        };

        let a1 = field(0..3, "first atom index")?;
        let a2 = field(3..6, "second atom index")?;
        let order_val = field(6..9, "bond order value")?;

        let order = match u8::try_from(order_val) {
            Ok(order @ 1..=3) => order,
            Ok(AROMATIC_ORDER) => {
                log::debug!("line {ln}: aromatic bond read as single");
                1
            }
            _ => {
                return Err(Error::parse(
                    Format::Sdf,
                    *ln,
                    "unsupported bond order in bond line",
                ));
            }
        };

        if a1 == 0 || a2 == 0 || a1 > atom_count || a2 > atom_count {
            return Err(Error::parse(
                Format::Sdf,
                *ln,
                "bond references atom outside declared range",
            ));
        }

        bonds.push(Bond::new(a1 - 1, a2 - 1, order));
    }
    Ok(bonds)
}

fn parse_data_items(lines: &[(usize, String)]) -> Vec<(String, String)> {
    let mut items = Vec::new();
    let mut iter = lines.iter().map(|(_, l)| l.as_str()).peekable();

    while let Some(line) = iter.next() {
        let Some(tag) = data_tag(line) else {
            continue;
        };

        let mut value = Vec::new();
        while let Some(next) = iter.peek() {
            if next.trim().is_empty() || data_tag(next).is_some() {
                break;
            }
            value.push(next.trim_end());
            iter.next();
        }
        items.push((tag.to_string(), value.join("\n")));
    }
    items
}

fn data_tag(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('>')?;
    let start = rest.find('<')?;
    let end = rest[start + 1..].find('>')?;
    Some(&rest[start + 1..start + 1 + end])
}

fn compound_info(title: &str, items: Vec<(String, String)>) -> Option<CompoundInfo> {
    if title.is_empty() && items.is_empty() {
        return None;
    }

    let mut info = CompoundInfo::new();
    for (tag, value) in items {
        match tag.as_str() {
            "PUBCHEM_COMPOUND_CID" => info.cid = value.trim().parse().ok(),
            "PUBCHEM_IUPAC_NAME" => info.name = Some(value),
            "PUBCHEM_MOLECULAR_FORMULA" => info.formula = Some(value),
            "PUBCHEM_MOLECULAR_WEIGHT" => info.molecular_weight = value.trim().parse().ok(),
            "PUBCHEM_OPENEYE_CAN_SMILES" | "PUBCHEM_SMILES" if info.smiles.is_none() => {
                info.smiles = Some(value)
            }
            _ => info.properties.push((tag, value)),
        }
    }

    if info.name.is_none() && !title.is_empty() && info.cid.is_none_or(|cid| title != cid.to_string())
    {
        info.name = Some(title.to_string());
    }

    Some(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER: &str = "\
962
  -OEChem-01012500003D

  3  2  0     0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
    0.2774    0.8929    0.2544 H   0  0  0  0  0  0  0  0  0  0  0  0
    0.6068   -0.2383   -0.7169 H   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
  1  3  1  0  0  0  0
M  END
> <PUBCHEM_COMPOUND_CID>
962

> <PUBCHEM_IUPAC_NAME>
oxidane

> <PUBCHEM_MOLECULAR_FORMULA>
H2O

> <PUBCHEM_MOLECULAR_WEIGHT>
18.015

> <PUBCHEM_OPENEYE_CAN_SMILES>
O

> <PUBCHEM_XLOGP3>
-0.5

$$$$
";

    fn record(counts: &str, atoms: &[&str], bonds: &[&str]) -> String {
        let mut s = String::from("title\n  prog\n\n");
        s.push_str(counts);
        s.push('\n');
        for line in atoms.iter().chain(bonds) {
            s.push_str(line);
            s.push('\n');
        }
        s.push_str("M  END\n$$$$\n");
        s
    }

    #[test]
    fn reads_atoms_and_zero_based_bonds() {
        let mol = read(Cursor::new(WATER)).unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.atoms[0].element, "O");
        assert_eq!(mol.atoms[1].position, [0.2774, 0.8929, 0.2544]);
        assert_eq!(mol.bonds, vec![Bond::single(0, 1), Bond::single(0, 2)]);
        assert!(mol.atoms_2d.is_none());
    }

    #[test]
    fn pubchem_items_fill_compound_info() {
        let info = read(Cursor::new(WATER)).unwrap().info.unwrap();
        assert_eq!(info.cid, Some(962));
        assert_eq!(info.name.as_deref(), Some("oxidane"));
        assert_eq!(info.formula.as_deref(), Some("H2O"));
        assert_eq!(info.molecular_weight, Some(18.015));
        assert_eq!(info.smiles.as_deref(), Some("O"));
        assert_eq!(info.properties, vec![("PUBCHEM_XLOGP3".to_string(), "-0.5".to_string())]);
    }

    #[test]
    fn title_names_compound_without_iupac_name() {
        let text = record(
            "  1  0  0  0  0  0  0  0  0  0999 V2000",
            &["    0.0000    0.0000    0.0000 Ne  0  0  0  0  0  0  0  0  0  0  0  0"],
            &[],
        );
        let info = read(Cursor::new(text)).unwrap().info.unwrap();
        assert_eq!(info.name.as_deref(), Some("title"));
        assert_eq!(info.cid, None);
    }

    #[test]
    fn keeps_two_letter_symbols_verbatim() {
        let text = record(
            "  2  1  0  0  0  0  0  0  0  0999 V2000",
            &[
                "    0.0000    0.0000    0.0000 Cl  0  0  0  0  0  0  0  0  0  0  0  0",
                "    2.0000    0.0000    0.0000 Xx  0  0  0  0  0  0  0  0  0  0  0  0",
            ],
            &["  1  2  1  0  0  0  0"],
        );
        let mol = read(Cursor::new(text)).unwrap();
        assert_eq!(mol.atoms[0].element, "Cl");
        assert_eq!(mol.atoms[1].element, "Xx");
    }

    #[test]
    fn reads_multiple_bonds_and_aromatic_as_single() {
        let atoms = [
            "    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0",
            "    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0",
            "    2.0000    0.0000    0.0000 N   0  0  0  0  0  0  0  0  0  0  0  0",
        ];
        let text = record(
            "  3  2  0  0  0  0  0  0  0  0999 V2000",
            &atoms,
            &["  1  2  4  0  0  0  0", "  2  3  3  0  0  0  0"],
        );
        let mol = read(Cursor::new(text)).unwrap();
        assert_eq!(mol.bonds[0].order, 1);
        assert_eq!(mol.bonds[1].order, 3);
    }

    #[test]
    fn counts_without_spaces_are_fixed_width() {
        let atoms: Vec<String> = (0..12)
            .map(|i| format!("{:>10.4}    0.0000    0.0000 C   0  0  0", i as f64))
            .collect();
        let atom_refs: Vec<&str> = atoms.iter().map(String::as_str).collect();
        let bonds: Vec<String> = (1..12).map(|i| format!("{:>3}{:>3}  1", i, i + 1)).collect();
        let bond_refs: Vec<&str> = bonds.iter().map(String::as_str).collect();
        let text = record(" 12 11  0  0  0  0  0  0  0  0999 V2000", &atom_refs, &bond_refs);

        let mol = read(Cursor::new(text)).unwrap();
        assert_eq!(mol.atom_count(), 12);
        assert_eq!(mol.bond_count(), 11);
        assert_eq!(mol.bonds[10], Bond::single(10, 11));
    }

    #[test]
    fn rejects_v3000() {
        let text = "x\n\n\n  0  0  0     0  0  0  0  0  0999 V3000\nM  END\n";
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }));
        assert!(err.to_string().contains("V3000"));
    }

    #[test]
    fn rejects_truncated_block() {
        let text = record(
            "  2  0  0  0  0  0  0  0  0  0999 V2000",
            &["    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0"],
            &[],
        );
        assert!(matches!(read(Cursor::new(text)), Err(Error::Parse { .. })));
    }

    #[test]
    fn rejects_bond_to_missing_atom() {
        let text = record(
            "  1  1  0  0  0  0  0  0  0  0999 V2000",
            &["    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0"],
            &["  1  2  1  0  0  0  0"],
        );
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(err.to_string().contains("outside declared range"));
    }

    #[test]
    fn rejects_bad_coordinate() {
        let text = record(
            "  1  0  0  0  0  0  0  0  0  0999 V2000",
            &["    0.0000    abcdef    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0"],
            &[],
        );
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }));
        assert!(err.to_string().contains("invalid y coordinate"));
    }

    #[test]
    fn only_first_record_is_read() {
        let mut text = String::from(WATER);
        text.push_str(&record(
            "  1  0  0  0  0  0  0  0  0  0999 V2000",
            &["    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0"],
            &[],
        ));
        let mol = read(Cursor::new(text)).unwrap();
        assert_eq!(mol.atom_count(), 3);
    }
}
