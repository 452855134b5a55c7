//! Static tag-code classification table.
//!
//! Codes observed in the wild range 0–93 and the table is sparse; codes
//! missing here are expected (newer format revisions keep adding tags) and
//! resolve to `None` rather than failing the parse.

use phf::{Map, phf_map};

/// Tag code of the `End` record that logically terminates the tag stream.
pub const TAG_END: u16 = 0;

/// Compile-time map from numeric tag code to symbolic tag name.
pub static TAG_NAMES: Map<u16, &'static str> = phf_map! {
    0u16 => "End",
    1u16 => "ShowFrame",
    2u16 => "DefineShape",
    4u16 => "PlaceObject",
    5u16 => "RemoveObject",
    6u16 => "DefineBits",
    7u16 => "DefineButton",
    8u16 => "JPEGTables",
    9u16 => "SetBackgroundColor",
    10u16 => "DefineFont",
    11u16 => "DefineText",
    12u16 => "DoAction",
    13u16 => "DefineFontInfo",
    14u16 => "DefineSound",
    15u16 => "StartSound",
    17u16 => "DefineButtonSound",
    18u16 => "SoundStreamHead",
    19u16 => "SoundStreamBlock",
    20u16 => "DefineBitsLossless",
    21u16 => "DefineBitsJPEG2",
    22u16 => "DefineShape2",
    23u16 => "DefineButtonCxform",
    24u16 => "Protect",
    26u16 => "PlaceObject2",
    28u16 => "RemoveObject2",
    32u16 => "DefineShape3",
    33u16 => "DefineText2",
    34u16 => "DefineButton2",
    35u16 => "DefineBitsJPEG3",
    36u16 => "DefineBitsLossless2",
    37u16 => "DefineEditText",
    39u16 => "DefineSprite",
    41u16 => "ProductInfo",
    43u16 => "FrameLabel",
    45u16 => "SoundStreamHead2",
    46u16 => "DefineMorphShape",
    48u16 => "DefineFont2",
    56u16 => "ExportAssets",
    57u16 => "ImportAssets",
    58u16 => "EnableDebugger",
    59u16 => "DoInitAction",
    60u16 => "DefineVideoStream",
    61u16 => "VideoFrame",
    62u16 => "DefineFontInfo2",
    63u16 => "DebugID",
    64u16 => "EnableDebugger2",
    65u16 => "ScriptLimits",
    66u16 => "SetTabIndex",
    69u16 => "FileAttributes",
    70u16 => "PlaceObject3",
    71u16 => "ImportAssets2",
    73u16 => "DefineFontAlignZones",
    74u16 => "CSMTextSettings",
    75u16 => "DefineFont3",
    76u16 => "SymbolClass",
    77u16 => "Metadata",
    78u16 => "DefineScalingGrid",
    82u16 => "DoABC",
    83u16 => "DefineShape4",
    84u16 => "DefineMorphShape2",
    86u16 => "DefineSceneAndFrameLabelData",
    87u16 => "DefineBinaryData",
    88u16 => "DefineFontName",
    89u16 => "StartSound2",
    90u16 => "DefineBitsJPEG4",
    91u16 => "DefineFont4",
    93u16 => "EnableTelemetry",
};

/// Resolve a tag code to its symbolic name, or `None` for codes not in the
/// table.
#[inline]
pub fn tag_name(code: u16) -> Option<&'static str> {
    TAG_NAMES.get(&code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(tag_name(0), Some("End"));
        assert_eq!(tag_name(9), Some("SetBackgroundColor"));
        assert_eq!(tag_name(82), Some("DoABC"));
        assert_eq!(tag_name(93), Some("EnableTelemetry"));
    }

    #[test]
    fn test_sparse_and_out_of_range_codes() {
        // Gaps in the table
        assert_eq!(tag_name(3), None);
        assert_eq!(tag_name(99), None);
        // Maximum encodable code (10 bits)
        assert_eq!(tag_name(1023), None);
    }
}
