//! Tests for character controller endpoints.

mod get_character;

use super::*;
