//! End-to-end pipeline tests over realistic roster rows.

use chrono::NaiveDate;
use dfc_clean::{clean_record, clean_table};
use dfc_model::{FacilitySize, InspectionDate, RawRecord};

fn spec_row() -> RawRecord {
    RawRecord {
        name: "B^AKER COUNTY CTR".to_string(),
        city: "FTLAUDERDALE".to_string(),
        state: "f l".to_string(),
        level_a: "1.80E-02".to_string(),
        level_b: String::new(),
        level_c: "5".to_string(),
        level_d: "10".to_string(),
        last_inspection: "45550".to_string(),
    }
}

#[test]
fn cleans_the_baker_county_row() {
    let (record, issues) = clean_record(&spec_row());

    assert!(record.name.contains("BAKER COUNTY CENTER"));
    assert_eq!(record.city, "FORT LAUDERDALE");
    assert_eq!(record.state, "FL");
    assert!(record.state_valid);

    assert_eq!(record.level_a, 0.02);
    assert_eq!(record.level_b, 0.0);
    assert_eq!(record.level_c, 5.0);
    assert_eq!(record.level_d, 10.0);
    assert_eq!(record.total_population, 15.02);
    assert_eq!(record.facility_size, FacilitySize::VerySmall);

    // Serial 45550 decodes inside the accepted year window.
    assert_eq!(
        record.last_inspection,
        InspectionDate::Date(NaiveDate::from_ymd_opt(2024, 9, 15).expect("valid date"))
    );

    // The blank Level_B was zero-filled, so the row counts as flagged.
    assert!(issues.any());
    assert_eq!(issues.zero_filled_counts, 1);
    assert!(!issues.invalid_state);
    assert!(!issues.unparseable_date);
}

#[test]
fn every_row_survives_a_hostile_table() {
    let rows = vec![
        spec_row(),
        RawRecord {
            name: "???".to_string(),
            city: String::new(),
            state: "zz".to_string(),
            level_a: "NA".to_string(),
            level_b: "N/A".to_string(),
            level_c: " ".to_string(),
            level_d: "not a number".to_string(),
            last_inspection: "99999".to_string(),
        },
        RawRecord {
            name: "EL PASO SVC PROC CTR".to_string(),
            city: "ELPASO".to_string(),
            state: "TX".to_string(),
            level_a: "400".to_string(),
            level_b: "350".to_string(),
            level_c: "200".to_string(),
            level_d: "75.5".to_string(),
            last_inspection: "September 19, 2024".to_string(),
        },
    ];

    let (records, flagged) = clean_table(&rows);
    assert_eq!(records.len(), 3);
    assert_eq!(flagged, 2);

    let hostile = &records[1];
    assert_eq!(hostile.total_population, 0.0);
    assert_eq!(hostile.facility_size, FacilitySize::VerySmall);
    assert!(!hostile.state_valid);
    assert_eq!(hostile.state, "ZZ");
    assert_eq!(
        hostile.last_inspection,
        InspectionDate::Unparseable("99999".to_string())
    );

    let el_paso = &records[2];
    assert_eq!(el_paso.name, "EL PASO SERVICE PROCESSING CENTER");
    assert_eq!(el_paso.total_population, 1025.5);
    assert_eq!(el_paso.facility_size, FacilitySize::Large);
    assert_eq!(
        el_paso.last_inspection,
        InspectionDate::Date(NaiveDate::from_ymd_opt(2024, 9, 19).expect("valid date"))
    );
}
