//! RSVP and contact forms driven through the key loop.

use super::sample_store;
use crate::model::Route;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::{Duration, Instant};

fn fill_rsvp(harness: &mut AcceptanceTestHarness) {
    harness.type_text("Hana Tesfaye");
    harness.send_key(KeyCode::Tab);
    harness.type_text("hana@example.com");
    harness.send_key(KeyCode::Tab);
    harness.type_text("0912 345 678");
}

#[test]
fn detail_to_rsvp_to_banner() {
    // GIVEN: detail screen of "Jazz Night"
    let mut harness = AcceptanceTestHarness::with_store(
        sample_store(),
        Route::Detail {
            id: Some("1".to_string()),
        },
    );

    // WHEN: user opens the RSVP form and fills it in
    harness.send_key(KeyCode::Char('r'));
    assert_eq!(
        harness.state().route(),
        &Route::Rsvp {
            id: Some("1".to_string())
        }
    );
    assert!(harness.render_to_string().contains("Admission: FREE"));

    fill_rsvp(&mut harness);
    harness.send_key(KeyCode::Enter);

    // THEN: the button shows progress, then the banner appears
    assert!(harness.render_to_string().contains("[ Submitting... ]"));

    harness.tick(Instant::now() + Duration::from_secs(2));
    let screen = harness.render_to_string();
    assert!(screen.contains("RSVP Confirmed! Thank you for registering for Jazz Night."));
    assert!(screen.contains("[ Confirm RSVP ]"));
    assert_eq!(harness.state().rsvp.form.value("name"), Some(""));

    // AND: the banner expires
    harness.tick(Instant::now() + Duration::from_secs(10));
    assert!(harness.state().banner.is_none());
}

#[test]
fn invalid_rsvp_shows_field_errors() {
    let mut harness = AcceptanceTestHarness::with_store(
        sample_store(),
        Route::Rsvp {
            id: Some("2".to_string()),
        },
    );

    harness.type_text("Hana");
    harness.send_key(KeyCode::Tab);
    harness.type_text("not-an-email");
    harness.send_key(KeyCode::Enter);

    assert!(!harness.state().rsvp.form.is_busy());
    let screen = harness.render_to_string();
    assert!(screen.contains("Please enter a valid email"));
    assert!(screen.contains("This field is required"));
}

#[test]
fn contact_reason_is_chosen_with_arrows() {
    let mut harness = AcceptanceTestHarness::with_store(sample_store(), Route::Contact);

    harness.send_key(KeyCode::Tab);
    harness.send_key(KeyCode::Tab);
    harness.send_key(KeyCode::Right);

    assert_eq!(harness.state().contact.value("reason"), Some("event"));
    assert!(harness.render_to_string().contains("‹ event ›"));
}

#[test]
fn esc_leaves_form_and_ctrl_c_quits() {
    let mut harness = AcceptanceTestHarness::with_store(sample_store(), Route::Home);
    harness.send_key(KeyCode::Char('4'));
    assert_eq!(harness.state().route(), &Route::Contact);

    harness.send_key(KeyCode::Esc);
    assert_eq!(harness.state().route(), &Route::Home);

    harness.send_key(KeyCode::Char('4'));
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!harness.is_running());
}
