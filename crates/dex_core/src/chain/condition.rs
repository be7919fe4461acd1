use super::raw::RawTrigger;

/// Text shown for an edge with no recognised condition.
pub const NO_CONDITION: &str = "N/A";

/// Render the conditions of one evolution edge, e.g. `"Lv. 16"` or
/// `"Item: fire-stone, (trade)"`.
pub fn format_conditions(triggers: &[RawTrigger]) -> String {
    let fragments: Vec<String> = triggers.iter().filter_map(describe_trigger).collect();
    if fragments.is_empty() {
        NO_CONDITION.to_string()
    } else {
        fragments.join(", ")
    }
}

// Level beats item beats named trigger; a record with none of them is dropped.
fn describe_trigger(trigger: &RawTrigger) -> Option<String> {
    if let Some(level) = trigger.min_level {
        return Some(format!("Lv. {level}"));
    }
    if let Some(item) = &trigger.item {
        return Some(format!("Item: {}", item.name));
    }
    trigger
        .trigger
        .as_ref()
        .map(|named| format!("({})", named.name.replace('-', " ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedResource;

    #[test]
    fn empty_list_is_not_available() {
        assert_eq!(format_conditions(&[]), "N/A");
    }

    #[test]
    fn unrecognised_record_is_dropped() {
        assert_eq!(format_conditions(&[RawTrigger::default()]), "N/A");
    }

    #[test]
    fn level_condition() {
        assert_eq!(format_conditions(&[RawTrigger::level(16)]), "Lv. 16");
    }

    #[test]
    fn item_condition() {
        assert_eq!(format_conditions(&[RawTrigger::item("fire-stone")]), "Item: fire-stone");
    }

    #[test]
    fn named_trigger_replaces_every_dash() {
        assert_eq!(
            format_conditions(&[RawTrigger::named("trade-evolve")]),
            "(trade evolve)"
        );
        assert_eq!(
            format_conditions(&[RawTrigger::named("three-critical-hits")]),
            "(three critical hits)"
        );
    }

    #[test]
    fn level_takes_precedence_over_item_and_trigger() {
        let trigger = RawTrigger {
            min_level: Some(20),
            item: Some(NamedResource::new("moon-stone", "")),
            trigger: Some(NamedResource::new("level-up", "")),
        };
        assert_eq!(format_conditions(&[trigger]), "Lv. 20");
    }

    #[test]
    fn item_takes_precedence_over_trigger() {
        let trigger = RawTrigger {
            item: Some(NamedResource::new("water-stone", "")),
            trigger: Some(NamedResource::new("use-item", "")),
            ..RawTrigger::default()
        };
        assert_eq!(format_conditions(&[trigger]), "Item: water-stone");
    }

    #[test]
    fn multiple_records_are_joined_skipping_unknown_ones() {
        let triggers = [
            RawTrigger::level(36),
            RawTrigger::default(),
            RawTrigger::named("trade"),
        ];
        assert_eq!(format_conditions(&triggers), "Lv. 36, (trade)");
    }
}
