use super::atom::Atom;
use super::metadata::CompoundInfo;

/// A bond between two atoms of a [`Molecule`].
///
/// The `from`/`to` orientation is kept exactly as supplied; layout treats
/// bonds as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub from: usize,
    pub to: usize,
    /// 1 = single, 2 = double, 3 = triple. Larger values are drawn as triple.
    pub order: u8,
}

impl Bond {
    pub fn new(from: usize, to: usize, order: u8) -> Self {
        Self { from, to, order }
    }

    pub fn single(from: usize, to: usize) -> Self {
        Self::new(from, to, 1)
    }

    /// Number of parallel strokes used to draw this bond.
    #[inline]
    pub fn drawn_order(&self) -> u8 {
        self.order.clamp(1, 3)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    /// Externally supplied 2D coordinates, parallel to `atoms`.
    pub atoms_2d: Option<Vec<[f64; 2]>>,
    pub info: Option<CompoundInfo>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns the 2D coordinates only when there is exactly one per atom.
    pub fn coordinates_2d(&self) -> Option<&[[f64; 2]]> {
        self.atoms_2d
            .as_deref()
            .filter(|coords| coords.len() == self.atoms.len())
    }

    #[inline]
    pub fn has_coordinates_2d(&self) -> bool {
        self.coordinates_2d().is_some()
    }

    /// Molecular formula in Hill order (C, then H, then the rest alphabetically).
    pub fn hill_formula(&self) -> String {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for atom in &self.atoms {
            match counts.iter_mut().find(|(el, _)| *el == atom.element) {
                Some((_, n)) => *n += 1,
                None => counts.push((atom.element.as_str(), 1)),
            }
        }

        let has_carbon = counts.iter().any(|(el, _)| *el == "C");
        counts.sort_by(|a, b| {
            let rank = |el: &str| match el {
                "C" if has_carbon => 0,
                "H" if has_carbon => 1,
                _ => 2,
            };
            rank(a.0).cmp(&rank(b.0)).then_with(|| a.0.cmp(b.0))
        });

        counts
            .into_iter()
            .map(|(el, n)| {
                if n == 1 {
                    el.to_string()
                } else {
                    format!("{el}{n}")
                }
            })
            .collect()
    }
}
