//! Test helpers module
//!
//! This module provides utilities and helpers for testing the StoryBuddy application.
//! It includes a mock Telegram server, generator fakes and test data.

#![allow(dead_code)]

pub mod fakes;
pub mod simple_test;
pub mod telegram_mock;

#[allow(unused_imports)]
pub use fakes::*;
#[allow(unused_imports)]
pub use simple_test::*;
#[allow(unused_imports)]
pub use telegram_mock::*;
