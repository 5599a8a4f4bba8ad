//! Integration tests for the showcase choreography using the `TestShowcase`
//! harness.
//!
//! These tests spin up a headless Bevy App with `ShowcasePlugin` and verify
//! behaviour that spans several systems: state transitions, load requests,
//! the loop sequence and the snow overlay.

mod loop_sequence_tests;
