// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: project records, built-in catalog, and catalog queries.

pub mod catalog;
pub mod data;
pub mod project;
