pub const NOT_IN_DATABASE: &str = "Compound not in database. Try a common organic molecule.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedCompound {
    pub formula: &'static str,
    pub name: &'static str,
    pub explanation: &'static str,
}

static COMPOUNDS: [NamedCompound; 4] = [
    NamedCompound {
        formula: "CH3COOH",
        name: "Ethanoic Acid",
        explanation: "A carboxylic acid with two carbon atoms.",
    },
    NamedCompound {
        formula: "C2H5OH",
        name: "Ethanol",
        explanation: "A two-carbon alcohol with a hydroxyl group.",
    },
    NamedCompound {
        formula: "CH3CH2CH3",
        name: "Propane",
        explanation: "A three-carbon alkane.",
    },
    NamedCompound {
        formula: "CH3CH=CH2",
        name: "Propene",
        explanation: "A three-carbon alkene with a double bond.",
    },
];

/// Exact, case-sensitive match; only surrounding whitespace is ignored.
pub fn find(formula: &str) -> Option<&'static NamedCompound> {
    let formula = formula.trim();
    COMPOUNDS.iter().find(|c| c.formula == formula)
}

pub fn lookup(formula: &str) -> String {
    match find(formula) {
        Some(compound) => format!("{} – {}", compound.name, compound.explanation),
        None => NOT_IN_DATABASE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formulas_resolve() {
        assert_eq!(
            lookup("CH3COOH"),
            "Ethanoic Acid – A carboxylic acid with two carbon atoms."
        );
        assert_eq!(
            lookup("C2H5OH"),
            "Ethanol – A two-carbon alcohol with a hydroxyl group."
        );
        assert_eq!(find("CH3CH=CH2").map(|c| c.name), Some("Propene"));
    }

    #[test]
    fn unknown_formula_gets_sentinel() {
        assert_eq!(lookup("unknown"), NOT_IN_DATABASE);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(lookup(" CH3COOH "), lookup("CH3COOH"));
        assert_eq!(lookup("\tC2H5OH\n"), lookup("C2H5OH"));
    }

    #[test]
    fn no_case_or_inner_normalization() {
        assert_eq!(lookup("ch3cooh"), NOT_IN_DATABASE);
        assert_eq!(lookup("CH3 COOH"), NOT_IN_DATABASE);
    }
}
