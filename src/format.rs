// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/format.rs - Content-based format detection for fabrication files.
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
 * # `format` Module
 *
 * This module detects the format family of a fabrication file from its
 * content, independent of the file name. Detection relies on two marker
 * substrings: the Gerber format-specification parameter block (`%FS`) and the
 * Excellon header command (`M48`).
 *
 * ## Usage Example
 *
 * ```
 * use pcbsort::format::{board_file_type, BoardFileType};
 *
 * fn main() {
 *     let gerber = "G04 Layer: top*\n%FSLAX26Y26*%\n%MOMM*%\n";
 *     assert_eq!(board_file_type(gerber), BoardFileType::Gerber);
 *
 *     let drill = "M48\nMETRIC\nT01C0.300\n%\n";
 *     assert_eq!(board_file_type(drill), BoardFileType::Drill);
 *
 *     assert_eq!(board_file_type("hello world"), BoardFileType::Unsupported);
 * }
 * ```
 */

/// The recognized format family of a fabrication file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardFileType {
    /// Gerber artwork data (RS-274X).
    Gerber,
    /// Excellon drill data.
    Drill,
    /// Neither format marker was found in the content.
    Unsupported,
}

/// Detects the format family of a file from its content.
///
/// The Gerber marker is checked first, so content that somehow carries both
/// markers is reported as [BoardFileType::Gerber]. Matching is case-sensitive
/// and position-independent. Empty content is [BoardFileType::Unsupported].
pub fn board_file_type(content: &str) -> BoardFileType {
    if content.contains("%FS") {
        BoardFileType::Gerber
    } else if content.contains("M48") {
        BoardFileType::Drill
    } else {
        BoardFileType::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_gerber() {
        let content = "G04 comment*\n%FSLAX26Y26*%\n";
        assert_eq!(board_file_type(content), BoardFileType::Gerber);
    }

    #[test]
    fn test_detects_drill() {
        let content = "M48\nT01C0.0100\n%\n";
        assert_eq!(board_file_type(content), BoardFileType::Drill);
    }

    #[test]
    fn test_gerber_marker_wins_over_drill_marker() {
        let content = "M48\n%FSLAX26Y26*%\n";
        assert_eq!(board_file_type(content), BoardFileType::Gerber);
    }

    #[test]
    fn test_marker_position_does_not_matter() {
        let content = "lots of leading text\nmore text\n%FSLAX24Y24*%";
        assert_eq!(board_file_type(content), BoardFileType::Gerber);
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert_eq!(board_file_type("%fslax26y26*%"), BoardFileType::Unsupported);
        assert_eq!(board_file_type("m48"), BoardFileType::Unsupported);
    }

    #[test]
    fn test_unsupported_content() {
        assert_eq!(board_file_type("int main(void) {}"), BoardFileType::Unsupported);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(board_file_type(""), BoardFileType::Unsupported);
    }
}
