// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod health_check;
mod helpers;
mod mongo_repository_test;
