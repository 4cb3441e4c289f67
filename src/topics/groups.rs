#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionalGroup {
    pub name: &'static str,
    pub bond_pattern: &'static str,
    pub example: &'static str,
    pub description: &'static str,
}

static GROUPS: [FunctionalGroup; 9] = [
    FunctionalGroup {
        name: "Alkane",
        bond_pattern: "C-C (single bond)",
        example: "Ethane (C2H6)",
        description: "Saturated hydrocarbon with only single bonds.",
    },
    FunctionalGroup {
        name: "Alkene",
        bond_pattern: "C=C (double bond)",
        example: "Ethene (C2H4)",
        description: "Unsaturated hydrocarbon with one or more double bonds.",
    },
    FunctionalGroup {
        name: "Alkyne",
        bond_pattern: "C≡C (triple bond)",
        example: "Ethyne (C2H2)",
        description: "Unsaturated hydrocarbon with one or more triple bonds.",
    },
    FunctionalGroup {
        name: "Alcohol",
        bond_pattern: "-OH",
        example: "Ethanol (C2H5OH)",
        description: "Contains a hydroxyl group.",
    },
    FunctionalGroup {
        name: "Carboxylic Acid",
        bond_pattern: "-COOH",
        example: "Ethanoic acid (CH3COOH)",
        description: "Contains a carboxyl group; acidic.",
    },
    FunctionalGroup {
        name: "Ketone",
        bond_pattern: "C=O (within chain)",
        example: "Propanone (CH3COCH3)",
        description: "Contains a carbonyl group bonded to two carbon atoms.",
    },
    FunctionalGroup {
        name: "Aldehyde",
        bond_pattern: "-CHO",
        example: "Ethanal (CH3CHO)",
        description: "Carbonyl group at end of chain.",
    },
    FunctionalGroup {
        name: "Ester",
        bond_pattern: "-COO-",
        example: "Ethyl ethanoate (CH3COOC2H5)",
        description: "Formed from acid + alcohol.",
    },
    FunctionalGroup {
        name: "Amine",
        bond_pattern: "-NH2",
        example: "Methylamine (CH3NH2)",
        description: "Contains an amino group.",
    },
];

pub fn list_groups() -> &'static [FunctionalGroup] {
    &GROUPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_its_order() {
        let names = list_groups().iter().map(|g| g.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Alkane",
                "Alkene",
                "Alkyne",
                "Alcohol",
                "Carboxylic Acid",
                "Ketone",
                "Aldehyde",
                "Ester",
                "Amine"
            ]
        );
    }

    #[test]
    fn ester_entry_is_complete() {
        let ester = list_groups().iter().find(|g| g.name == "Ester").unwrap();
        assert_eq!(ester.bond_pattern, "-COO-");
        assert_eq!(ester.example, "Ethyl ethanoate (CH3COOC2H5)");
    }
}
