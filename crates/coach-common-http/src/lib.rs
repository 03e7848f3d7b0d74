// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the coach client.
//!
//! Every outbound request goes through a client built here so the API sees a
//! consistent User-Agent. There is no retry layer; a failed call
//! is reported to the caller once.

mod client;

pub use client::{build_client, builder, user_agent, DEFAULT_TIMEOUT};
