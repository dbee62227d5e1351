/// Descriptive compound data fetched alongside a structure.
///
/// None of these fields influence layout; they are carried so that callers
/// can show them next to the drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundInfo {
    /// Compound identifier in the source database.
    pub cid: Option<u64>,
    pub name: Option<String>,
    pub formula: Option<String>,
    /// Molecular weight in g/mol.
    pub molecular_weight: Option<f64>,
    pub smiles: Option<String>,
    /// Any remaining computed properties, in the order they were received.
    pub properties: Vec<(String, String)>,
}

impl CompoundInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name to show in headings: the compound name, then `CID n`, then the formula.
    pub fn display_name(&self) -> Option<String> {
        self.name
            .clone()
            .or_else(|| self.cid.map(|cid| format!("CID {cid}")))
            .or_else(|| self.formula.clone())
    }
}
