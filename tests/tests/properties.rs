//! Mapping properties: exclusion, exact types, alias case, last-source-wins,
//! no-match preservation and idempotence.

use duckmap_tests::prelude::*;
use proptest::prelude::*;

mod exclusion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_excluded_destination_field_never_modified() {
        // GIVEN an audited person at revision 7 and a source with a different revision
        let mut person = AuditedPerson {
            id: 1,
            name: "Amy".to_string(),
            revision: 7,
        };
        let source = record! { "revision" => 99u32, "name" => "Kif".to_string() };

        // WHEN mapping
        map!(person, source).unwrap();

        // THEN the revision is unchanged while the other field is mapped
        assert_eq!(person.revision, 7);
        assert_eq!(person.name, "Kif");
    }

    proptest! {
        #[test]
        fn prop_excluded_field_survives_any_source(initial in any::<u32>(), incoming in any::<u32>()) {
            let mut person = AuditedPerson { revision: initial, ..AuditedPerson::default() };
            let source = AuditedPerson { revision: incoming, ..AuditedPerson::default() };

            map!(person, source, record! { "revision" => incoming }).unwrap();

            prop_assert_eq!(person.revision, initial);
        }
    }
}

mod exact_types {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_never_fills_int() {
        // GIVEN an int id on the destination and a string id on the source
        let mut person = Person {
            id: 42,
            ..Person::default()
        };

        // WHEN mapping
        map!(person, birthday_value()).unwrap();

        // THEN the id is unchanged
        assert_eq!(person.id, 42);
    }

    #[test]
    fn test_width_mismatch_is_a_type_mismatch() {
        let mut sample = Sample::default();

        map!(sample, record! { "x" => 5i32, "untouched" => 1u32 }).unwrap();

        assert_eq!(sample, Sample::default());
    }

    #[allow(non_snake_case)]
    #[derive(Debug, Clone, Default, Describe)]
    struct Twin {
        X: String,
        x: i64,
    }

    #[test]
    fn test_first_same_named_source_field_decides() {
        // GIVEN a source whose first "x" is a string and second "x" is an i64
        let twin = Twin {
            X: "five".to_string(),
            x: 5,
        };
        let mut sample = Sample::default();

        // WHEN mapping
        map!(sample, twin).unwrap();

        // THEN the first match decides, and its type does not fit
        assert_eq!(sample.x, 0);
    }

    #[test]
    fn test_replaced_record_field_takes_new_type() {
        let mut source = record! { "x" => "five".to_string() };
        source.insert("X", Value::new(5i64));
        let mut sample = Sample::default();

        map!(sample, source).unwrap();

        assert_eq!(sample.x, 5);
    }
}

mod aliases {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alias_matches_any_case() {
        for declared in ["name", "NAME", "nAmE", "Name"] {
            let mut person = Person::default();

            map!(person, Record::new().with(declared, "Zoidberg".to_string())).unwrap();

            assert_eq!(person.first_name, "Zoidberg", "source field {declared}");
        }
    }

    #[test]
    fn test_upper_case_struct_fields() {
        let mut person = Person::default();
        let row = ShoutingRow {
            ID: 3,
            NAME: "Hermes".to_string(),
        };

        map!(person, row).unwrap();

        assert_eq!(person.id, 3);
        assert_eq!(person.first_name, "Hermes");
    }

    #[test]
    fn test_declared_name_does_not_match_when_aliased() {
        // `first_name` is mapped as "Name" only
        let mut person = Person::default();

        map!(person, record! { "first_name" => "Nibbler".to_string() }).unwrap();

        assert_eq!(person.first_name, "");
    }
}

mod ordering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_last_source_wins() {
        let mut sample = Sample::default();
        let a = SampleSource {
            x: 1,
            label: "a".to_string(),
        };
        let b = SampleSource {
            x: 2,
            label: "b".to_string(),
        };

        map_into(
            Some(&mut sample as &mut dyn Mappable),
            [Some(&a as &dyn Mappable), Some(&b as &dyn Mappable)],
        )
        .unwrap();

        assert_eq!(sample.x, 2);
        assert_eq!(sample.label, "b");
    }

    #[test]
    fn test_later_source_without_match_keeps_earlier_value() {
        let mut sample = Sample::default();
        let a = SampleSource {
            x: 1,
            label: "a".to_string(),
        };

        map!(sample, a, record! { "label" => "b".to_string() }).unwrap();

        assert_eq!(sample.x, 1);
        assert_eq!(sample.label, "b");
    }

    proptest! {
        #[test]
        fn prop_last_source_wins(values in prop::collection::vec(any::<i64>(), 1..8)) {
            let sources: Vec<SampleSource> = values
                .iter()
                .map(|&x| SampleSource { x, label: x.to_string() })
                .collect();
            let mut sample = Sample::default();

            map_into(
                Some(&mut sample as &mut dyn Mappable),
                sources.iter().map(|s| Some(s as &dyn Mappable)),
            )
            .unwrap();

            let last = values[values.len() - 1];
            prop_assert_eq!(sample.x, last);
            prop_assert_eq!(sample.label, last.to_string());
        }
    }
}

mod preservation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_match_field_keeps_value() {
        let mut sample = Sample {
            untouched: 17,
            ..Sample::default()
        };
        let before = snapshot(&sample);

        map!(sample, SampleSource { x: 3, label: "c".to_string() }).unwrap();

        assert_eq!(sample.untouched, 17);
        assert_eq!(before.changed(&snapshot(&sample)), vec!["x", "label"]);
    }

    proptest! {
        #[test]
        fn prop_no_match_preserved(untouched in any::<u16>(), x in any::<i64>(), label in ".*") {
            let mut sample = Sample { untouched, ..Sample::default() };

            map!(sample, SampleSource { x, label: label.clone() }).unwrap();

            prop_assert_eq!(sample, Sample { x, label, untouched });
        }

        #[test]
        fn prop_map_into_is_idempotent(x in any::<i64>(), label in ".*", start in any::<i64>()) {
            let source = SampleSource { x, label };
            let mut once = Sample { x: start, ..Sample::default() };
            map!(once, source).unwrap();

            let mut twice = once.clone();
            map!(twice, source).unwrap();

            prop_assert_eq!(once, twice);
        }
    }
}

mod constructed {
    use super::*;

    proptest! {
        #[test]
        fn prop_map_new_equals_map_into_fresh(a in any::<i64>(), b in any::<i64>()) {
            let first = SampleSource { x: a, label: "first".to_string() };
            let second = record! { "x" => b };

            let created = map_new!(Sample, first, second).unwrap();
            let mut fresh = Sample::default();
            map!(fresh, first, second).unwrap();

            prop_assert_eq!(created, fresh);
        }
    }
}
