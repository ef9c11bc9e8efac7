// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/classifier.rs - Side and layer classification from file names.
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
 * # `classifier` Module
 *
 * This module maps a fabrication file name to the board side and physical
 * layer it describes, using the static tables in [crate::tables].
 *
 * Classification runs as an ordered pipeline of resolver stages, each either
 * producing an assignment or passing the name to the next stage:
 *
 * 1. The extension is looked up in the vendor extension table.
 * 2. Generic Gerber extensions (`gbr`, `grb`, `ger`, `art`) carry no layer
 *    information, so the base name is looked up instead.
 * 3. Failing that, the full name is scanned for CAD tool name markers such
 *    as the KiCad `-F_Cu` plot suffix.
 * 4. Failing that, side and layer are inferred independently from keyword
 *    fragments, and the result is kept only if both halves resolved.
 * 5. If the side is still unknown, the name is scanned for dotted layer
 *    descriptors such as `.toplayer`.
 *
 * Anything that falls through every stage is `{Unknown, Unknown}`; the
 * function never fails.
 *
 * ## Usage Example
 *
 * ```
 * use pcbsort::classifier::{determine_side_and_layer, BoardLayer, BoardSide};
 *
 * fn main() {
 *     let assignment = determine_side_and_layer("gerbers/design-F_Cu.gbr");
 *     assert_eq!(assignment.side, BoardSide::Top);
 *     assert_eq!(assignment.layer, BoardLayer::Copper);
 * }
 * ```
 */

use crate::tables;

/// The physical board layer a fabrication file describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardLayer {
    /// Copper artwork.
    Copper,
    /// Solder mask (solder resist).
    SolderMask,
    /// Silkscreen legend.
    Silk,
    /// Solder paste stencil.
    Paste,
    /// Drill holes.
    Drill,
    /// Milling/routing paths.
    Mill,
    /// Board outline.
    Outline,
    /// Carbon contact layer.
    Carbon,
    /// Fabrication notes.
    Notes,
    /// Assembly drawing.
    Assembly,
    /// Mechanical layer.
    Mechanical,
    /// The layer could not be determined.
    Unknown,
}

/// The side of the board a layer applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSide {
    /// Top (component) side.
    Top,
    /// Bottom (solder) side.
    Bottom,
    /// Side-independent data, such as an outline or drill file.
    Both,
    /// An inner copper layer or plane.
    Internal,
    /// The side could not be determined.
    Unknown,
}

/// The side and layer a fabrication file was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerAssignment {
    /// The side of the board.
    pub side: BoardSide,
    /// The physical layer.
    pub layer: BoardLayer,
}

impl LayerAssignment {
    /// The unclassified assignment.
    pub const UNKNOWN: Self = Self::new(BoardSide::Unknown, BoardLayer::Unknown);

    pub const fn new(side: BoardSide, layer: BoardLayer) -> Self {
        Self { side, layer }
    }
}

impl Default for LayerAssignment {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

/// Classifies a file name (optionally with a `/`-separated path prefix) as a
/// board side and layer.
///
/// Never fails: names that match no stage come back as
/// [LayerAssignment::UNKNOWN]. Matching is case-insensitive throughout, with
/// the one exception documented on [tables::ASSEMBLY_KEYWORDS].
pub fn determine_side_and_layer(path: &str) -> LayerAssignment {
    let lower = path.to_lowercase();
    let ext = file_ext(&lower);

    let mut assignment = if tables::GENERIC_GERBER_EXTENSIONS.contains(&ext) {
        resolve_generic_base_name(&lower)
            .or_else(|| resolve_name_marker(&lower))
            .or_else(|| resolve_keywords(&lower))
            .unwrap_or(LayerAssignment::UNKNOWN)
    } else {
        tables::lookup_extension(ext).unwrap_or(LayerAssignment::UNKNOWN)
    };

    if assignment.side == BoardSide::Unknown {
        if let Some(descriptor) = resolve_descriptor(&lower) {
            assignment = descriptor;
        }
    }

    assignment
}

/// Returns the text after the last `.` in `path`, case preserved, or the
/// empty string when there is no dot. Case-folding happens inside
/// classification, not here.
pub fn file_ext(path: &str) -> &str {
    match path.rfind('.') {
        Some(index) => &path[index + 1..],
        None => "",
    }
}

/// Returns the text after the last `/` in `path`, or the whole input when
/// there is no separator. `\` is not treated as a separator, so Windows-style
/// paths pass through unchanged.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Matches the base name (the part of the path-stripped name before the
/// first `.`) against the generic base-name table.
fn resolve_generic_base_name(lower: &str) -> Option<LayerAssignment> {
    let name = file_name(lower);
    let base = match name.find('.') {
        Some(index) => &name[..index],
        None => name,
    };

    tables::GENERIC_BASE_NAMES
        .iter()
        .find(|(key, _)| *key == base)
        .map(|(_, assignment)| *assignment)
}

/// Scans the full lower-cased name for CAD tool name markers, in table
/// order. The first marker found wins.
fn resolve_name_marker(lower: &str) -> Option<LayerAssignment> {
    tables::GENERIC_NAME_MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map(|(_, assignment)| *assignment)
}

/// Infers side and layer independently from keyword fragments. The combined
/// result is kept only when both halves resolved; a half-match is discarded
/// rather than reported.
fn resolve_keywords(lower: &str) -> Option<LayerAssignment> {
    let mut side = if lower.contains("top") {
        BoardSide::Top
    } else if lower.contains("bot") {
        BoardSide::Bottom
    } else if lower.contains("board") {
        BoardSide::Both
    } else {
        BoardSide::Unknown
    };

    let layer = if lower.contains("copper") {
        BoardLayer::Copper
    } else if lower.contains("paste") || lower.contains("cream") {
        BoardLayer::Paste
    } else if lower.contains("mask") {
        BoardLayer::SolderMask
    } else if lower.contains("silk") {
        BoardLayer::Silk
    } else if tables::ASSEMBLY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        BoardLayer::Assembly
    } else if lower.contains("outline") || lower.contains("dimension") {
        BoardLayer::Outline
    } else if lower.contains("layer") {
        // A bare "layer" token is an inner signal layer, whatever the side
        // keywords said.
        side = BoardSide::Internal;
        BoardLayer::Copper
    } else {
        BoardLayer::Unknown
    };

    if side == BoardSide::Unknown || layer == BoardLayer::Unknown {
        return None;
    }

    Some(LayerAssignment::new(side, layer))
}

/// Scans the full lower-cased name for dotted layer descriptors, in table
/// order. The first descriptor found wins.
fn resolve_descriptor(lower: &str) -> Option<LayerAssignment> {
    tables::DESCRIPTOR_TABLE
        .iter()
        .find(|(fragment, _)| lower.contains(fragment))
        .map(|(_, assignment)| *assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(side: BoardSide, layer: BoardLayer) -> LayerAssignment {
        LayerAssignment::new(side, layer)
    }

    #[test]
    fn test_tabled_extensions() {
        assert_eq!(
            determine_side_and_layer("board.gtl"),
            assignment(BoardSide::Top, BoardLayer::Copper)
        );
        assert_eq!(
            determine_side_and_layer("board.gbs"),
            assignment(BoardSide::Bottom, BoardLayer::SolderMask)
        );
        assert_eq!(
            determine_side_and_layer("myfile.drl"),
            assignment(BoardSide::Both, BoardLayer::Drill)
        );
        assert_eq!(
            determine_side_and_layer("board.gml"),
            assignment(BoardSide::Both, BoardLayer::Mill)
        );
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        assert_eq!(
            determine_side_and_layer("BOARD.GTL"),
            assignment(BoardSide::Top, BoardLayer::Copper)
        );
    }

    #[test]
    fn test_path_prefix_is_tolerated() {
        assert_eq!(
            determine_side_and_layer("output/gerbers/board.gbl"),
            assignment(BoardSide::Bottom, BoardLayer::Copper)
        );
    }

    #[test]
    fn test_generic_extension_base_name() {
        assert_eq!(
            determine_side_and_layer("topmask.gbr"),
            assignment(BoardSide::Top, BoardLayer::SolderMask)
        );
        assert_eq!(
            determine_side_and_layer("boardoutline.ger"),
            assignment(BoardSide::Both, BoardLayer::Outline)
        );
        assert_eq!(
            determine_side_and_layer("gerbers/top.gbr"),
            assignment(BoardSide::Top, BoardLayer::Copper)
        );
        assert_eq!(
            determine_side_and_layer("inner1.art"),
            assignment(BoardSide::Internal, BoardLayer::Copper)
        );
    }

    #[test]
    fn test_kicad_plot_suffixes() {
        assert_eq!(
            determine_side_and_layer("design-F_Cu.gbr"),
            assignment(BoardSide::Top, BoardLayer::Copper)
        );
        assert_eq!(
            determine_side_and_layer("design-B_Mask.gbr"),
            assignment(BoardSide::Bottom, BoardLayer::SolderMask)
        );
        assert_eq!(
            determine_side_and_layer("design-Edge_Cuts.gbr"),
            assignment(BoardSide::Both, BoardLayer::Outline)
        );
    }

    #[test]
    fn test_inner_layer_suffixes() {
        assert_eq!(
            determine_side_and_layer("proj_lyr3.gbr"),
            assignment(BoardSide::Internal, BoardLayer::Copper)
        );
    }

    #[test]
    fn test_keyword_scoring() {
        assert_eq!(
            determine_side_and_layer("pcb_topcopper.gbr"),
            assignment(BoardSide::Top, BoardLayer::Copper)
        );
        assert_eq!(
            determine_side_and_layer("mainboard_silk.gbr"),
            assignment(BoardSide::Both, BoardLayer::Silk)
        );
        assert_eq!(
            determine_side_and_layer("rev2_bot_cream.ger"),
            assignment(BoardSide::Bottom, BoardLayer::Paste)
        );
    }

    #[test]
    fn test_keyword_scoring_rejects_half_matches() {
        // Side resolves but no layer keyword is present.
        assert_eq!(determine_side_and_layer("topfile.gbr"), LayerAssignment::UNKNOWN);
        // Layer resolves but no side keyword is present.
        assert_eq!(determine_side_and_layer("silkygerber.gbr"), LayerAssignment::UNKNOWN);
    }

    #[test]
    fn test_layer_keyword_forces_internal_side() {
        assert_eq!(
            determine_side_and_layer("signal_layer2.ger"),
            assignment(BoardSide::Internal, BoardLayer::Copper)
        );
    }

    #[test]
    fn test_descriptor_fallback() {
        assert_eq!(
            determine_side_and_layer("myproj.TopLayer.PHO"),
            assignment(BoardSide::Top, BoardLayer::Copper)
        );
        assert_eq!(
            determine_side_and_layer("myproj.BottomSolderMask.pho"),
            assignment(BoardSide::Bottom, BoardLayer::SolderMask)
        );
        assert_eq!(
            determine_side_and_layer("myproj.InternalPlane1.pho"),
            assignment(BoardSide::Internal, BoardLayer::Copper)
        );
        assert_eq!(
            determine_side_and_layer("myproj.bcream.pho"),
            assignment(BoardSide::Bottom, BoardLayer::Paste)
        );
    }

    #[test]
    fn test_unrecognized_names() {
        assert_eq!(determine_side_and_layer("random.xyz"), LayerAssignment::UNKNOWN);
        assert_eq!(determine_side_and_layer("noextension"), LayerAssignment::UNKNOWN);
        assert_eq!(determine_side_and_layer(""), LayerAssignment::UNKNOWN);
    }

    #[test]
    fn test_unicode_names_do_not_panic() {
        assert_eq!(determine_side_and_layer("基板データ.ファイル"), LayerAssignment::UNKNOWN);
        assert_eq!(
            determine_side_and_layer("基板/board.gtl"),
            assignment(BoardSide::Top, BoardLayer::Copper)
        );
    }

    #[test]
    fn test_classification_is_idempotent() {
        for name in ["board.gtl", "design-F_Cu.gbr", "random.xyz", ""] {
            assert_eq!(determine_side_and_layer(name), determine_side_and_layer(name));
        }
    }

    #[test]
    fn test_file_ext() {
        assert_eq!(file_ext("path/to/file.GTL"), "GTL");
        assert_eq!(file_ext("archive.tar.gz"), "gz");
        assert_eq!(file_ext("trailingdot."), "");
        assert_eq!(file_ext("noextension"), "");
        assert_eq!(file_ext(""), "");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("a/b/c.txt"), "c.txt");
        assert_eq!(file_name("c.txt"), "c.txt");
        assert_eq!(file_name("a/b/"), "");
        assert_eq!(file_name(r"C:\dir\file.gtl"), r"C:\dir\file.gtl");
    }

    #[test]
    fn test_file_ext_ignores_path_prefix() {
        let path = "some/dir.with.dots/file.gtl";
        assert_eq!(file_ext(path), file_ext(file_name(path)));
    }
}
