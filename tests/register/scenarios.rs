//! Scenario Tests
//!
//! Longer operation sequences checked step by step.

use crate::*;

// ============================================================================
// Five parcels, several owners
// ============================================================================

#[test]
fn listing_before_any_transfer() {
    let register = five_parcels();

    assert_eq!(
        rows(register.list_by_address()),
        vec![
            row("Liberec", "Evropska", "Librec", 4552, ""),
            row("Plzen", "Evropska", "Plzen mesto", 78901, ""),
            row("Prague", "Evropska", "Vokovice", 12345, ""),
            row("Prague", "Technicka", "Dejvice", 9873, ""),
            row("Prague", "Thakurova", "Dejvice", 12345, ""),
        ]
    );

    // Unowned parcels come back in insertion order
    assert_eq!(register.count_by_owner(""), 5);
    assert_eq!(
        rows(register.list_by_owner("")),
        vec![
            row("Prague", "Thakurova", "Dejvice", 12345, ""),
            row("Prague", "Evropska", "Vokovice", 12345, ""),
            row("Prague", "Technicka", "Dejvice", 9873, ""),
            row("Plzen", "Evropska", "Plzen mesto", 78901, ""),
            row("Liberec", "Evropska", "Librec", 4552, ""),
        ]
    );

    assert_eq!(register.count_by_owner("CVUT"), 0);
    assert!(register.list_by_owner("CVUT").at_end());
}

#[test]
fn transfers_show_up_in_every_view() {
    let mut register = five_parcels();

    register.transfer_by_address("Prague", "Thakurova", "CVUT").unwrap();
    register.transfer_by_region("Dejvice", 9873, "CVUT").unwrap();
    register.transfer_by_address("Plzen", "Evropska", "Anton Hrabis").unwrap();
    register.transfer_by_region("Librec", 4552, "Cvut").unwrap();

    assert_eq!(register.owner_by_address("Prague", "Thakurova").unwrap(), "CVUT");
    assert_eq!(register.owner_by_region("Dejvice", 12345).unwrap(), "CVUT");
    assert_eq!(register.owner_by_address("Prague", "Evropska").unwrap(), "");
    assert_eq!(register.owner_by_region("Vokovice", 12345).unwrap(), "");
    assert_eq!(register.owner_by_address("Prague", "Technicka").unwrap(), "CVUT");
    assert_eq!(register.owner_by_region("Dejvice", 9873).unwrap(), "CVUT");
    assert_eq!(register.owner_by_address("Plzen", "Evropska").unwrap(), "Anton Hrabis");
    assert_eq!(register.owner_by_region("Plzen mesto", 78901).unwrap(), "Anton Hrabis");
    assert_eq!(register.owner_by_address("Liberec", "Evropska").unwrap(), "Cvut");
    assert_eq!(register.owner_by_region("Librec", 4552).unwrap(), "Cvut");

    assert_eq!(
        rows(register.list_by_address()),
        vec![
            row("Liberec", "Evropska", "Librec", 4552, "Cvut"),
            row("Plzen", "Evropska", "Plzen mesto", 78901, "Anton Hrabis"),
            row("Prague", "Evropska", "Vokovice", 12345, ""),
            row("Prague", "Technicka", "Dejvice", 9873, "CVUT"),
            row("Prague", "Thakurova", "Dejvice", 12345, "CVUT"),
        ]
    );

    assert_eq!(register.count_by_owner("cvut"), 3);
    assert_eq!(
        rows(register.list_by_owner("cVuT")),
        vec![
            row("Prague", "Thakurova", "Dejvice", 12345, "CVUT"),
            row("Prague", "Technicka", "Dejvice", 9873, "CVUT"),
            row("Liberec", "Evropska", "Librec", 4552, "Cvut"),
        ]
    );

    register.transfer_by_region("Plzen mesto", 78901, "CVut").unwrap();
    assert_eq!(register.count_by_owner("CVUT"), 4);
    assert_eq!(
        rows(register.list_by_owner("CVUT")),
        vec![
            row("Prague", "Thakurova", "Dejvice", 12345, "CVUT"),
            row("Prague", "Technicka", "Dejvice", 9873, "CVUT"),
            row("Liberec", "Evropska", "Librec", 4552, "Cvut"),
            row("Plzen", "Evropska", "Plzen mesto", 78901, "CVut"),
        ]
    );

    register.remove_by_address("Liberec", "Evropska").unwrap();
    register.remove_by_region("Plzen mesto", 78901).unwrap();
    assert_eq!(register.count_by_owner("cvut"), 2);
    assert_eq!(
        rows(register.list_by_owner("cVuT")),
        vec![
            row("Prague", "Thakurova", "Dejvice", 12345, "CVUT"),
            row("Prague", "Technicka", "Dejvice", 9873, "CVUT"),
        ]
    );

    // Removed keys can be registered again
    register.insert("Liberec", "Evropska", "Librec", 4552).unwrap();
    assert_eq!(register.owner_by_region("Librec", 4552).unwrap(), "");
}

// ============================================================================
// Conflicts, misses and case-sensitive keys
// ============================================================================

#[test]
fn conflicts_and_misses() {
    let mut register = LandRegister::new();

    register.insert("Prague", "Thakurova", "Dejvice", 12345).unwrap();
    register.insert("Prague", "Evropska", "Vokovice", 12345).unwrap();
    register.insert("Prague", "Technicka", "Dejvice", 9873).unwrap();
    assert!(register
        .insert("Prague", "Technicka", "Hradcany", 7344)
        .unwrap_err()
        .is_conflict());
    assert!(register
        .insert("Brno", "Bozetechova", "Dejvice", 9873)
        .unwrap_err()
        .is_conflict());
    assert!(register.owner_by_address("Prague", "THAKUROVA").unwrap_err().is_not_found());
    assert!(register.owner_by_region("Hradcany", 7343).unwrap_err().is_not_found());

    assert_eq!(
        rows(register.list_by_address()),
        vec![
            row("Prague", "Evropska", "Vokovice", 12345, ""),
            row("Prague", "Technicka", "Dejvice", 9873, ""),
            row("Prague", "Thakurova", "Dejvice", 12345, ""),
        ]
    );

    register.transfer_by_address("Prague", "Thakurova", "CVUT").unwrap();
    assert!(register
        .transfer_by_address("Prague", "technicka", "CVUT")
        .unwrap_err()
        .is_not_found());
    assert!(register
        .transfer_by_address("prague", "Technicka", "CVUT")
        .unwrap_err()
        .is_not_found());
    assert!(register
        .transfer_by_region("dejvice", 9873, "CVUT")
        .unwrap_err()
        .is_not_found());
    assert!(register
        .transfer_by_region("Dejvice", 9973, "CVUT")
        .unwrap_err()
        .is_not_found());
    assert!(register
        .transfer_by_region("Dejvice", 12345, "CVUT")
        .unwrap_err()
        .is_noop());
    assert_eq!(register.count_by_owner("CVUT"), 1);
    assert_eq!(
        rows(register.list_by_owner("CVUT")),
        vec![row("Prague", "Thakurova", "Dejvice", 12345, "CVUT")]
    );

    assert!(register.remove_by_address("Brno", "Technicka").unwrap_err().is_not_found());
    assert!(register.remove_by_region("Karlin", 9873).unwrap_err().is_not_found());
    register.remove_by_address("Prague", "Technicka").unwrap();
    assert!(register.remove_by_address("Prague", "Technicka").is_err());
    assert!(register.remove_by_region("Dejvice", 9873).is_err());

    // Ids wider than 32 bits
    register.insert("Tokyo", "Nagana", "Tokyo City", 12_020_203_993).unwrap();
    assert_eq!(register.owner_by_region("Tokyo City", 12_020_203_993).unwrap(), "");
}

#[test]
fn two_parcel_walkthrough() {
    let mut register = LandRegister::new();
    register.insert("Prague", "Thakurova", "Dejvice", 12345).unwrap();
    register.insert("Plzen", "Evropska", "Plzen mesto", 78901).unwrap();

    let cursor = register.list_by_address();
    assert_eq!(cursor.city(), "Plzen");
    assert_eq!(
        rows(cursor),
        vec![
            row("Plzen", "Evropska", "Plzen mesto", 78901, ""),
            row("Prague", "Thakurova", "Dejvice", 12345, ""),
        ]
    );

    register.transfer_by_address("Prague", "Thakurova", "CVUT").unwrap();
    assert_eq!(register.owner_by_region("Dejvice", 12345).unwrap(), "CVUT");
    assert_eq!(register.count_by_owner("cvut"), 1);
    assert!(register
        .transfer_by_region("Dejvice", 12345, "CVUT")
        .unwrap_err()
        .is_noop());
}
