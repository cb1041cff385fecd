// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for catalogs and still images.

pub mod media;
pub mod serialization;
