use std::io::{self, Write};

use lewis_layout::{CompoundInfo, LewisLayout, Molecule};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_ATOM_ROWS: usize = 40;

pub fn print_structure_info(molecule: &Molecule) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Formula", molecule.hill_formula()),
        ("Total Atoms", molecule.atom_count().to_string()),
        ("Total Bonds", molecule.bond_count().to_string()),
        (
            "2D Coordinates",
            if molecule.has_coordinates_2d() {
                "supplied".to_string()
            } else {
                "none".to_string()
            },
        ),
    ];

    print_kv_table(&mut out, "Structure Summary", &rows);
    print_element_distribution(&mut out, molecule);
}

pub fn print_compound_info(info: &CompoundInfo) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = Vec::new();
    if let Some(name) = &info.name {
        rows.push(("Name", name.clone()));
    }
    if let Some(cid) = info.cid {
        rows.push(("CID", cid.to_string()));
    }
    if let Some(formula) = &info.formula {
        rows.push(("Formula", formula.clone()));
    }
    if let Some(weight) = info.molecular_weight {
        rows.push(("Weight (g/mol)", format!("{weight:.3}")));
    }
    if let Some(smiles) = &info.smiles {
        rows.push(("SMILES", smiles.clone()));
    }
    for (key, value) in &info.properties {
        rows.push((property_label(key), value.replace('\n', " ")));
    }

    if rows.is_empty() {
        return;
    }
    print_kv_table(&mut out, &compound_title(info), &rows);
}

fn compound_title(info: &CompoundInfo) -> String {
    match info.display_name() {
        Some(name) => format!("Compound: {name}"),
        None => "Compound".to_string(),
    }
}

pub fn print_layout_summary(layout: &LewisLayout) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let lone_pairs: usize = layout
        .atom_info
        .iter()
        .filter(|info| info.shows_lone_pairs())
        .map(|info| info.lone_pairs)
        .sum();

    let mut rows = vec![
        ("Placement", layout.mode.to_string()),
        ("Surface", format!("{} × {}", layout.size[0], layout.size[1])),
        (
            "Scale",
            layout
                .scale
                .map(|s| format!("{s:.3}"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Lone Pairs Drawn", lone_pairs.to_string()),
    ];
    if let Some(seed) = layout.seed {
        rows.insert(1, ("Seed Atom", format!("{} ({})", seed + 1, layout.atom_info[seed].element)));
    }
    if !layout.unreached.is_empty() {
        rows.push(("Unreached Atoms", layout.unreached.len().to_string()));
    }
    if layout.graph.skipped_bonds > 0 {
        rows.push(("Skipped Bonds", layout.graph.skipped_bonds.to_string()));
    }

    print_kv_table(&mut out, "Layout", &rows);
}

/// Per-atom electron bookkeeping and normalized position.
#[rustfmt::skip]
pub fn print_atom_table(layout: &LewisLayout) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(out, "{}┌─ Atoms ─┐", INDENT);
    let _ = writeln!(out, "{}┌──────┬──────┬─────┬───────┬────────┬────┬─────┬──────────────────┐", INDENT);
    let _ = writeln!(out, "{}│    # │ Elem │ Val │ Bonds │ Bonded │ LP │ Dom │         Position │", INDENT);
    let _ = writeln!(out, "{}├──────┼──────┼─────┼───────┼────────┼────┼─────┼──────────────────┤", INDENT);

    for (info, pos) in layout.atom_info.iter().zip(&layout.positions).take(MAX_ATOM_ROWS) {
        let _ = writeln!(
            out,
            "{}│ {:>4} │ {:<4} │ {:>3} │ {:>5} │ {:>6} │ {:>2} │ {:>3} │ {:>16} │",
            INDENT,
            pos.atom + 1,
            truncate(&info.element, 4),
            info.valence,
            info.bond_count,
            info.bonded_electrons,
            info.lone_pairs,
            info.total_domains,
            format!("({:.1}, {:.1})", pos.x, pos.y),
        );
    }

    if layout.positions.len() > MAX_ATOM_ROWS {
        let more = format!("({} more atoms)", layout.positions.len() - MAX_ATOM_ROWS);
        let _ = writeln!(out, "{}│ {:>4} │ {:<57} │", INDENT, "...", more);
    }

    let _ = writeln!(out, "{}└──────┴──────┴─────┴───────┴────────┴────┴─────┴──────────────────┘", INDENT);
}

fn print_element_distribution(out: &mut impl Write, molecule: &Molecule) {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for atom in &molecule.atoms {
        match counts.iter_mut().find(|(el, _)| *el == atom.element) {
            Some((_, n)) => *n += 1,
            None => counts.push((atom.element.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = molecule.atom_count();
    if total == 0 {
        return;
    }

    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let _ = writeln!(out, "{}┌─ Element Distribution ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{name_line}┬{count_line}┬{dist_line}┐",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Element", "Count", "Distribution",
    );
    let _ = writeln!(
        out,
        "{}├{name_line}┼{count_line}┼{dist_line}┤",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );

    for (name, count) in &counts {
        let pct = (*count as f64 / total as f64) * 100.0;
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            dist_cell,
        );
    }

    let _ = writeln!(
        out,
        "{}└{name_line}┴{count_line}┴{dist_line}┘",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

/// Shortens `PUBCHEM_XLOGP3_AA` style tags to a readable label.
fn property_label(tag: &str) -> &str {
    tag.strip_prefix("PUBCHEM_").unwrap_or(tag)
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
