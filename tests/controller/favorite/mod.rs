//! Tests for favorite controller endpoints.

mod delete_favorite;

use super::*;
