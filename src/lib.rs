// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Classifier library for Gerber and Excellon fabrication files.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `pcbsort` Crate
 *
 * A library for classifying PCB fabrication files (Gerber and Excellon/drill
 * data) by inspecting file names and file content.
 *
 * This crate answers the three questions a fabrication pipeline asks about an
 * uploaded file:
 *
 * 1. [format]: Is the content recognizably Gerber or Excellon drill data?
 * 2. [classifier]: Which board side and physical layer does the file name
 *    describe?
 * 3. [tables]: Is the file extension on the denylist of formats that are
 *    never fabrication data (source code, images, CAD project files, ...)?
 *
 * Every operation is a pure, total function: unrecognized input degrades to
 * `Unknown`/`Unsupported` instead of failing, so the caller can accept
 * arbitrary uploads without special-casing errors.
 *
 * ## Usage Example
 *
 * ```
 * use pcbsort::classifier::{self, BoardLayer, BoardSide};
 * use pcbsort::format::{self, BoardFileType};
 * use pcbsort::tables;
 *
 * fn main() {
 *     // Filter out files that can never be fabrication data
 *     assert!(tables::is_denylisted("png"));
 *     assert!(!tables::is_denylisted("gtl"));
 *
 *     // Classify by file name
 *     let assignment = classifier::determine_side_and_layer("board.gtl");
 *     assert_eq!(assignment.side, BoardSide::Top);
 *     assert_eq!(assignment.layer, BoardLayer::Copper);
 *
 *     // Detect the format family from file content
 *     let kind = format::board_file_type("G04 comment*\n%FSLAX26Y26*%\n");
 *     assert_eq!(kind, BoardFileType::Gerber);
 * }
 * ```
 */

pub mod classifier;
pub mod format;
pub mod tables;
