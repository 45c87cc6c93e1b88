// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event matching engine.
//!
//! Events only carry free text, so most filters work on attributes derived
//! from the title, emoji, location and start time. Derivation never fails:
//! missing distances default to 3 km and unreadable start times count as
//! morning.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{
    ActivityType, DistanceFilter, DogProfile, DogSize, EnergyLevel, Event, FilterCriteria,
    Friendliness, TimeOfDay,
};
use crate::time_utils::parse_clock_hour;

/// Distance assumed when the location has no "(Nkm)" marker.
pub const DEFAULT_DISTANCE_KM: f64 = 3.0;
/// Upper bound (inclusive) of the "close" distance bucket.
pub const CLOSE_DISTANCE_KM: f64 = 3.0;

static DISTANCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)km\)").expect("distance pattern is valid"));

/// Time of day an event starts, from a 12-hour clock string.
pub fn derive_time_of_day(start_time: &str) -> TimeOfDay {
    match parse_clock_hour(start_time) {
        Some(hour) => TimeOfDay::from_hour(hour),
        None => {
            tracing::warn!(start_time, "Unparseable event start time, assuming morning");
            TimeOfDay::Morning
        }
    }
}

/// Activity type implied by the title keywords and emoji. First rule wins.
pub fn derive_activity_type(event: &Event) -> ActivityType {
    let title = event.title.to_lowercase();
    let emoji = event.emoji.as_str();

    if title.contains("training") || title.contains("puppy") || emoji == "🐶" {
        ActivityType::Training
    } else if title.contains("social") || title.contains("playdate") || emoji == "🎉" {
        ActivityType::Playgroup
    } else if title.contains("hike") || title.contains("adventure") || emoji == "⛰️" {
        ActivityType::Active
    } else {
        ActivityType::Casual
    }
}

/// Dog size an event suits best.
pub fn derive_size_compatibility(event: &Event) -> DogSize {
    let title = event.title.to_lowercase();

    if title.contains("puppy") || title.contains("small") {
        DogSize::Small
    } else if title.contains("large") || event.attendee_count > 15 {
        DogSize::Large
    } else if title.contains("hike") || title.contains("adventure") {
        DogSize::Large
    } else {
        DogSize::Medium
    }
}

/// Distance embedded in a location string as "(Nkm)".
pub fn derive_distance_km(location: &str) -> f64 {
    DISTANCE_PATTERN
        .captures(location)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(DEFAULT_DISTANCE_KM)
}

/// Energy level an event's activity demands.
pub fn required_energy_level(activity_type: ActivityType) -> EnergyLevel {
    match activity_type {
        ActivityType::Active => EnergyLevel::High,
        ActivityType::Training | ActivityType::Playgroup => EnergyLevel::Medium,
        ActivityType::Casual => EnergyLevel::Low,
    }
}

/// Minimum sociability an event calls for.
pub fn required_friendliness(activity_type: ActivityType, attendee_count: u32) -> Friendliness {
    if activity_type == ActivityType::Playgroup || attendee_count > 10 {
        Friendliness::VeryFriendly
    } else if activity_type == ActivityType::Training || attendee_count > 5 {
        Friendliness::Friendly
    } else {
        Friendliness::SomewhatFriendly
    }
}

/// All derived attributes of an event, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTraits {
    pub time_of_day: TimeOfDay,
    pub activity_type: ActivityType,
    pub size: DogSize,
    pub distance_km: f64,
}

impl EventTraits {
    pub fn derive(event: &Event) -> Self {
        Self {
            time_of_day: derive_time_of_day(&event.start_time),
            activity_type: derive_activity_type(event),
            size: derive_size_compatibility(event),
            distance_km: derive_distance_km(&event.location),
        }
    }
}

/// Whether an event suits a dog profile.
///
/// Each rule rejects on its own; an event must clear all of them.
pub fn matches_profile(event: &Event, profile: &DogProfile) -> bool {
    profile_accepts(event, &EventTraits::derive(event), profile)
}

fn profile_accepts(event: &Event, traits: &EventTraits, profile: &DogProfile) -> bool {
    if profile.prefers("morning walks") && traits.time_of_day != TimeOfDay::Morning {
        return false;
    }
    if profile.prefers("social groups") && traits.activity_type != ActivityType::Playgroup {
        return false;
    }
    if profile.prefers("beach areas") && !event.location.to_lowercase().contains("beach") {
        return false;
    }

    match (profile.energy, traits.activity_type) {
        (Some(EnergyLevel::High), ActivityType::Casual) => return false,
        (Some(EnergyLevel::Low), ActivityType::Active) => return false,
        _ => {}
    }

    !matches!(
        (profile.size, traits.size),
        (Some(DogSize::Small), DogSize::Large) | (Some(DogSize::Large), DogSize::Small)
    )
}

/// Whether an event satisfies at least one selected walking preference.
fn matches_any_preference(event: &Event, traits: &EventTraits, preferences: &[String]) -> bool {
    let details = format!("{} {}", event.title, event.location).to_lowercase();
    let attendees = event.attendee_count;

    preferences.iter().any(|pref| {
        let pref = pref.to_lowercase();

        (pref.contains("morning") && traits.time_of_day == TimeOfDay::Morning)
            || (pref.contains("evening") && traits.time_of_day == TimeOfDay::Evening)
            || (pref.contains("beach") && details.contains("beach"))
            || (pref.contains("park") && details.contains("park"))
            || (pref.contains("social") && traits.activity_type == ActivityType::Playgroup)
            || (pref.contains("training") && traits.activity_type == ActivityType::Training)
            || (pref.contains("exercise") && traits.activity_type == ActivityType::Active)
            || (pref.contains("solo") && attendees <= 3)
            || (pref.contains("small groups") && attendees <= 8)
            || (pref.contains("large groups") && attendees > 8)
            || (pref.contains("long") && traits.distance_km > 5.0)
            || (pref.contains("short") && traits.distance_km <= CLOSE_DISTANCE_KM)
    })
}

fn passes(
    event: &Event,
    criteria: &FilterCriteria,
    search: &str,
    profile: Option<&DogProfile>,
) -> bool {
    if !search.is_empty()
        && !event.title.to_lowercase().contains(search)
        && !event.location.to_lowercase().contains(search)
    {
        return false;
    }

    let traits = EventTraits::derive(event);

    if criteria.smart_match {
        if let Some(profile) = profile {
            if !profile_accepts(event, &traits, profile) {
                return false;
            }
        }
    }

    if criteria
        .time_of_day
        .is_some_and(|wanted| wanted != traits.time_of_day)
    {
        return false;
    }

    if criteria.dog_size.is_some_and(|wanted| wanted != traits.size) {
        return false;
    }

    match criteria.distance {
        Some(DistanceFilter::Close) if traits.distance_km > CLOSE_DISTANCE_KM => return false,
        Some(DistanceFilter::Far) if traits.distance_km <= CLOSE_DISTANCE_KM => return false,
        _ => {}
    }

    if criteria
        .activity_type
        .is_some_and(|wanted| wanted != traits.activity_type)
    {
        return false;
    }

    if criteria
        .energy_level
        .is_some_and(|wanted| wanted != required_energy_level(traits.activity_type))
    {
        return false;
    }

    if criteria.friendliness.is_some_and(|dog_friendliness| {
        dog_friendliness < required_friendliness(traits.activity_type, event.attendee_count)
    }) {
        return false;
    }

    if !criteria.walking_preferences.is_empty()
        && !matches_any_preference(event, &traits, &criteria.walking_preferences)
    {
        return false;
    }

    true
}

/// Events passing every active filter, in their original order.
///
/// Smart match is skipped when no profile is given.
pub fn filter_events(
    events: &[Event],
    criteria: &FilterCriteria,
    profile: Option<&DogProfile>,
) -> Vec<Event> {
    let search = criteria.search.to_lowercase();

    let filtered: Vec<Event> = events
        .iter()
        .filter(|event| passes(event, criteria, &search, profile))
        .cloned()
        .collect();

    tracing::debug!(
        total = events.len(),
        matched = filtered.len(),
        smart_match = criteria.smart_match,
        "Filtered events"
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(title: &str, location: &str, attendees: u32, start: &str, emoji: &str) -> Event {
        Event {
            id: 1,
            title: title.to_string(),
            location: location.to_string(),
            attendee_count: attendees,
            date: "Sat 6 September".to_string(),
            start_time: start.to_string(),
            end_time: String::new(),
            emoji: emoji.to_string(),
        }
    }

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(derive_time_of_day("6:00 am"), TimeOfDay::Morning);
        assert_eq!(derive_time_of_day("5:59 am"), TimeOfDay::Evening);
        assert_eq!(derive_time_of_day("11:59 am"), TimeOfDay::Morning);
        assert_eq!(derive_time_of_day("12:00 pm"), TimeOfDay::Afternoon);
        assert_eq!(derive_time_of_day("4:30 pm"), TimeOfDay::Afternoon);
        assert_eq!(derive_time_of_day("5:00 pm"), TimeOfDay::Evening);
        assert_eq!(derive_time_of_day("12:15 am"), TimeOfDay::Evening);
    }

    #[test]
    fn test_unparseable_time_is_morning() {
        assert_eq!(derive_time_of_day("sometime"), TimeOfDay::Morning);
        assert_eq!(derive_time_of_day(""), TimeOfDay::Morning);
    }

    #[test]
    fn test_activity_type_rule_order() {
        // "Puppy" wins over "Social"
        let e = make_event("Puppy Social", "Park (2km)", 4, "9:00 am", "🎉");
        assert_eq!(derive_activity_type(&e), ActivityType::Training);

        let e = make_event("Harbor Walk", "Wharf (4km)", 9, "7:00 am", "⛰️");
        assert_eq!(derive_activity_type(&e), ActivityType::Active);

        let e = make_event("Park Playdate", "Park (1km)", 8, "4:00 pm", "🌳");
        assert_eq!(derive_activity_type(&e), ActivityType::Playgroup);

        let e = make_event("Evening Stroll", "Road (3km)", 4, "6:30 pm", "🌆");
        assert_eq!(derive_activity_type(&e), ActivityType::Casual);
    }

    #[test]
    fn test_size_compatibility() {
        let e = make_event("Small Dog Meetup", "Park", 20, "9:00 am", "");
        assert_eq!(derive_size_compatibility(&e), DogSize::Small);

        let e = make_event("Social Hour", "Park", 16, "9:00 am", "");
        assert_eq!(derive_size_compatibility(&e), DogSize::Large);

        let e = make_event("Weekend Hike", "Hill", 15, "9:00 am", "");
        assert_eq!(derive_size_compatibility(&e), DogSize::Large);

        let e = make_event("Harbor Walk", "Wharf", 9, "9:00 am", "");
        assert_eq!(derive_size_compatibility(&e), DogSize::Medium);
    }

    #[test]
    fn test_distance_extraction() {
        assert_eq!(derive_distance_km("Mount Eden, Auckland (6km)"), 6.0);
        assert_eq!(derive_distance_km("Somewhere (12km) or (2km)"), 12.0);
        assert_eq!(derive_distance_km("No distance here"), DEFAULT_DISTANCE_KM);
        assert_eq!(derive_distance_km("Fractional (2.5km)"), DEFAULT_DISTANCE_KM);
        assert_eq!(derive_distance_km("Far away (99999999999km)"), 99_999_999_999.0);
    }

    #[test]
    fn test_required_friendliness_tiers() {
        assert_eq!(
            required_friendliness(ActivityType::Playgroup, 2),
            Friendliness::VeryFriendly
        );
        assert_eq!(
            required_friendliness(ActivityType::Casual, 11),
            Friendliness::VeryFriendly
        );
        assert_eq!(
            required_friendliness(ActivityType::Training, 2),
            Friendliness::Friendly
        );
        assert_eq!(
            required_friendliness(ActivityType::Casual, 6),
            Friendliness::Friendly
        );
        assert_eq!(
            required_friendliness(ActivityType::Active, 5),
            Friendliness::SomewhatFriendly
        );
    }

    #[test]
    fn test_profile_energy_rules() {
        let casual = make_event("Evening Stroll", "Road (3km)", 4, "6:30 pm", "🌆");
        let hike = make_event("Weekend Hike", "Hill (6km)", 15, "8:00 am", "⛰️");

        let mut profile = DogProfile::new("1", "Rex");
        profile.energy = Some(EnergyLevel::High);
        assert!(!matches_profile(&casual, &profile));
        assert!(matches_profile(&hike, &profile));

        profile.energy = Some(EnergyLevel::Low);
        assert!(matches_profile(&casual, &profile));
        assert!(!matches_profile(&hike, &profile));

        // Only "High" excludes casual events
        profile.energy = Some(EnergyLevel::VeryHigh);
        assert!(matches_profile(&casual, &profile));
    }

    #[test]
    fn test_profile_preferences_are_case_insensitive() {
        let event = make_event("Harbor Walk", "Wynyard Quarter (4km)", 9, "7:00 am", "⚓");
        let mut profile = DogProfile::new("1", "Rex");
        profile.walking_preferences = vec!["Morning Walks".to_string()];
        assert!(matches_profile(&event, &profile));

        profile.walking_preferences.push("Beach areas".to_string());
        assert!(!matches_profile(&event, &profile));
    }
}
