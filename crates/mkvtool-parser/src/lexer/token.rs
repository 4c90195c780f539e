//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized in a release-name stem.
///
/// Metadata tokens carry explicit priorities so they win over the generic
/// [`Token::Word`] and [`Token::Number`] patterns when both match the same
/// text. Logos always prefers the longest match, so `WEB-DL` is a single
/// source token rather than `WEB`, hyphen, `DL`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Season and episode marker (S01E02, s1e2, S01E01E02)
    #[regex(r"(?i)S[0-9]{1,4}E[0-9]{1,4}(E[0-9]{1,4})*", priority = 10)]
    SeasonEpisode(&'src str),

    /// Season x episode marker (1x05, 12x103)
    #[regex(r"[0-9]{1,2}x[0-9]{1,3}", priority = 9)]
    SeasonEpisodeX(&'src str),

    /// Video resolution (2160p, 1080p, 720p, 576i, 4K, 1920x1080).
    /// Frame sizes outrank Year and SeasonEpisodeX on their leading digits.
    #[regex(r"(?i)((2160|1080|720|576|480)[pi]|4K|[0-9]{3,4}x[0-9]{3,4})", priority = 10)]
    Resolution(&'src str),

    /// Release source
    #[regex(
        r"(?i)(BluRay|Blu-Ray|BDRip|BRRip|WEB-?DL|WEB-?Rip|HDTV|HDRip|DVDRip|REMUX)",
        priority = 7
    )]
    Source(&'src str),

    /// Video codec
    #[regex(r"(?i)(x264|x265|H\.?264|H\.?265|HEVC|AVC|XviD|DivX|AV1)", priority = 8)]
    Codec(&'src str),

    /// Audio format, optionally with a channel layout
    #[regex(
        r"(?i)((AAC|AC3|EAC3|DDP?|DTS|DTS-HD|TrueHD|FLAC)(2\.0|5\.1|7\.1)?|Atmos)",
        priority = 7
    )]
    Audio(&'src str),

    /// Edition markers
    #[regex(
        r"(?i)(EXTENDED|UNCUT|UNRATED|REMASTERED|THEATRICAL|DIRECTORS[._ ]?CUT)",
        priority = 6
    )]
    Edition(&'src str),

    /// PROPER release marker
    #[regex(r"(?i)PROPER", priority = 6)]
    Proper(&'src str),

    /// REPACK release marker
    #[regex(r"(?i)REPACK", priority = 6)]
    Repack(&'src str),

    /// Year (1900-2099)
    #[regex(r"(19|20)[0-9]{2}", priority = 5)]
    Year(&'src str),

    #[token(".")]
    Dot,

    #[token("-")]
    Hyphen,

    #[token("_")]
    Underscore,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Generic word (lowest priority)
    #[regex(r"[a-zA-Z][a-zA-Z0-9'&]*", priority = 1)]
    Word(&'src str),

    /// Generic number
    #[regex(r"[0-9]+", priority = 2)]
    Number(&'src str),
}

impl Token<'_> {
    /// Whether the token is one of the recognized metadata patterns (as
    /// opposed to a delimiter, bracket, or a plain word/number).
    pub fn is_metadata(&self) -> bool {
        matches!(
            self,
            Token::SeasonEpisode(_)
                | Token::SeasonEpisodeX(_)
                | Token::Resolution(_)
                | Token::Source(_)
                | Token::Codec(_)
                | Token::Audio(_)
                | Token::Edition(_)
                | Token::Proper(_)
                | Token::Repack(_)
                | Token::Year(_)
        )
    }
}
