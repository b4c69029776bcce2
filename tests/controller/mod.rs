//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors already built, the response is then
//! rendered and checked for status and JSON body.

mod character;
mod favorite;

use holonet::server::model::app::AppState;
use holonet_test_utils::prelude::*;

use crate::util::into_json;
