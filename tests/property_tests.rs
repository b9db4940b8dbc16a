//! Property-based tests for the machines and the numeric exercises.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use white_box::core::Transitions;
use white_box::exercises::{
    calculate_total_discount, celsius_to_fahrenheit, is_triangle, validate_password, Temperature,
    TriangleCheck,
};
use white_box::machines::{
    ElevatorEvent, ElevatorState, ElevatorSystem, LightState, TrafficLight, VendingMachine,
    VendingState, INVALID_OPERATION,
};

prop_compose! {
    fn arbitrary_elevator_event()(variant in 0..3u8) -> ElevatorEvent {
        match variant {
            0 => ElevatorEvent::MoveUp,
            1 => ElevatorEvent::MoveDown,
            _ => ElevatorEvent::Stop,
        }
    }
}

proptest! {
    #[test]
    fn traffic_light_follows_cycle(n in 0usize..100) {
        let mut light = TrafficLight::new();
        for _ in 0..n {
            light.change_state();
        }
        prop_assert_eq!(light.get_current_state(), LightState::CYCLE[n % 3]);
        prop_assert_eq!(light.history().len(), n);
    }

    #[test]
    fn traffic_light_history_path_matches_cycle(n in 1usize..30) {
        let mut light = TrafficLight::new();
        for _ in 0..n {
            light.change_state();
        }
        let path = light.history().get_path();
        prop_assert_eq!(path.len(), n + 1);
        for (i, state) in path.iter().enumerate() {
            prop_assert_eq!(**state, LightState::CYCLE[i % 3]);
        }
    }

    #[test]
    fn vending_machine_rejects_every_extra_coin(extra in 1usize..10) {
        let mut machine = VendingMachine::new();
        machine.insert_coin();
        for _ in 0..extra {
            prop_assert_eq!(machine.insert_coin(), INVALID_OPERATION);
            prop_assert_eq!(machine.state(), VendingState::Dispensing);
        }
        prop_assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn elevator_wrapper_agrees_with_transition_function(
        events in prop::collection::vec(arbitrary_elevator_event(), 0..20)
    ) {
        let mut elevator = ElevatorSystem::new();
        let mut expected = ElevatorState::Idle;
        for event in events {
            let before = elevator.history().len();
            let reply = match event {
                ElevatorEvent::MoveUp => elevator.move_up(),
                ElevatorEvent::MoveDown => elevator.move_down(),
                ElevatorEvent::Stop => elevator.stop(),
            };
            match expected.on(event) {
                Some(next) => {
                    expected = next;
                    prop_assert_ne!(reply, INVALID_OPERATION);
                    prop_assert_eq!(elevator.history().len(), before + 1);
                }
                None => {
                    prop_assert_eq!(reply, INVALID_OPERATION);
                    prop_assert_eq!(elevator.history().len(), before);
                }
            }
            prop_assert_eq!(elevator.state(), expected);
        }
    }

    #[test]
    fn temperature_is_linear_inside_bounds(celsius in -100.0f64..=100.0) {
        let expected = celsius * 9.0 / 5.0 + 32.0;
        prop_assert_eq!(celsius_to_fahrenheit(celsius), Temperature::Fahrenheit(expected));
    }

    #[test]
    fn temperature_is_invalid_outside_bounds(offset in 0.001f64..1e6, below in any::<bool>()) {
        let celsius = if below { -100.0 - offset } else { 100.0 + offset };
        prop_assert_eq!(celsius_to_fahrenheit(celsius), Temperature::Invalid);
    }

    #[test]
    fn triangle_matches_strict_inequalities(a in 0u32..50, b in 0u32..50, c in 0u32..50) {
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        let expected = a < b + c && b < a + c && c < a + b;
        prop_assert_eq!(is_triangle(a, b, c) == TriangleCheck::Triangle, expected);
    }

    #[test]
    fn triangle_is_symmetric(a in 0u32..50, b in 0u32..50, c in 0u32..50) {
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        let result = is_triangle(a, b, c);
        prop_assert_eq!(is_triangle(b, c, a), result);
        prop_assert_eq!(is_triangle(c, a, b), result);
        prop_assert_eq!(is_triangle(b, a, c), result);
    }

    #[test]
    fn total_discount_is_monotonic(a in 0u32..2_000, b in 0u32..2_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            calculate_total_discount(f64::from(low)) <= calculate_total_discount(f64::from(high))
        );
    }

    #[test]
    fn lowercase_only_passwords_are_rejected(password in "[a-z]{0,20}") {
        prop_assert!(!validate_password(&password));
    }
}
