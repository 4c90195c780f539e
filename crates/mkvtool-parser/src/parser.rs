//! Heuristic extraction rules over the token stream.
//!
//! Every rule writes its own field and records the byte spans it consumed.
//! The title is whatever text precedes the earliest consumed span.

use std::ops::Range;
use std::path::Path;

use mkvtool_common::paths::container_extension;

use crate::lexer::{leading_bracket_group, Lexer, Token};
use crate::model::SceneMetadata;

type Tokens<'a, 'src> = &'a [(Token<'src>, Range<usize>)];

/// Parse a filename into scene metadata. Directory components are ignored.
pub fn parse(file_name: &str) -> SceneMetadata {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);

    let mut meta = SceneMetadata::new();

    let stem = match (container_extension(base), base.rfind('.')) {
        (Some(ext), Some(dot)) => {
            meta.insert("container", ext);
            &base[..dot]
        }
        _ => base,
    };

    let mut title_start = 0;
    if let Some((outer, inner)) = leading_bracket_group(stem) {
        let group = stem[inner].trim();
        if !group.is_empty() {
            meta.insert("group", group);
        }
        title_start = outer.end;
    }

    let lexer = Lexer::new(stem);
    let tokens: Vec<_> = lexer
        .tokens()
        .iter()
        .filter(|(_, span)| span.start >= title_start)
        .cloned()
        .collect();

    let mut consumed: Vec<Range<usize>> = Vec::new();

    season_episode(&tokens, &mut meta, &mut consumed);
    year(&tokens, &mut meta, &mut consumed);
    resolution(&tokens, &mut meta, &mut consumed);
    tagged(&tokens, &mut meta, &mut consumed);
    flags(&tokens, &mut meta, &mut consumed);
    trailing_group(&tokens, &mut meta, &mut consumed);

    if let Some(title) = title(stem, title_start, &consumed) {
        meta.insert("title", title);
    }

    meta
}

fn season_episode(tokens: Tokens, meta: &mut SceneMetadata, consumed: &mut Vec<Range<usize>>) {
    for (token, span) in tokens {
        let parsed = match token {
            Token::SeasonEpisode(text) => split_sxxeyy(text),
            Token::SeasonEpisodeX(text) => text.split_once(['x', 'X']),
            _ => None,
        };
        if let Some((season, episode)) = parsed {
            meta.insert("season", season);
            meta.insert("episode", episode);
            consumed.push(span.clone());
            return;
        }
    }
}

/// Split `S01E02E03` into `("01", "02")`. Only the first episode is kept.
fn split_sxxeyy(text: &str) -> Option<(&str, &str)> {
    let rest = text.get(1..)?;
    let e = rest.find(['e', 'E'])?;
    let season = &rest[..e];
    let after = &rest[e + 1..];
    let episode = match after.find(['e', 'E']) {
        Some(next) => &after[..next],
        None => after,
    };
    Some((season, episode))
}

/// The last year-looking token wins, unless it opens the title region:
/// `2001.A.Space.Odyssey.1968` is a 1968 film and `2012.mkv` is just a title.
fn year(tokens: Tokens, meta: &mut SceneMetadata, consumed: &mut Vec<Range<usize>>) {
    let first_content = tokens.iter().position(|(t, _)| {
        !matches!(
            t,
            Token::Dot
                | Token::Hyphen
                | Token::Underscore
                | Token::BracketOpen
                | Token::BracketClose
                | Token::ParenOpen
                | Token::ParenClose
        )
    });

    let candidate = tokens
        .iter()
        .enumerate()
        .filter(|(i, (t, _))| matches!(t, Token::Year(_)) && Some(*i) != first_content)
        .last();

    if let Some((_, (Token::Year(text), span))) = candidate {
        meta.insert("year", *text);
        consumed.push(span.clone());
    }
}

fn resolution(tokens: Tokens, meta: &mut SceneMetadata, consumed: &mut Vec<Range<usize>>) {
    for (token, span) in tokens {
        if let Token::Resolution(text) = token {
            let value = if text.eq_ignore_ascii_case("4k") {
                "4K".to_string()
            } else {
                text.to_lowercase()
            };
            if !meta.contains("resolution") {
                meta.insert("resolution", value);
            }
            consumed.push(span.clone());
        }
    }
}

/// Fields whose value is the token text as written.
fn tagged(tokens: Tokens, meta: &mut SceneMetadata, consumed: &mut Vec<Range<usize>>) {
    for (token, span) in tokens {
        let (field, text) = match token {
            Token::Source(text) => ("source", *text),
            Token::Codec(text) => ("codec", *text),
            Token::Audio(text) => ("audio", *text),
            Token::Edition(text) => ("edition", *text),
            _ => continue,
        };
        meta.insert(field, text);
        consumed.push(span.clone());
    }
}

fn flags(tokens: Tokens, meta: &mut SceneMetadata, consumed: &mut Vec<Range<usize>>) {
    for (token, span) in tokens {
        let field = match token {
            Token::Proper(_) => "proper",
            Token::Repack(_) => "repack",
            _ => continue,
        };
        meta.insert(field, "true");
        consumed.push(span.clone());
    }
}

/// `...x264-GROUP`: a final word after a hyphen names the release group.
///
/// Only applied once something else was recognized, so plain hyphenated
/// titles such as `Spider-Man` stay intact.
fn trailing_group(tokens: Tokens, meta: &mut SceneMetadata, consumed: &mut Vec<Range<usize>>) {
    if consumed.is_empty() {
        return;
    }
    if let [.., (Token::Hyphen, hyphen), (Token::Word(group), _)] = tokens {
        meta.insert("group", *group);
        consumed.push(hyphen.start..hyphen.end + group.len());
    }
}

fn title(stem: &str, title_start: usize, consumed: &[Range<usize>]) -> Option<String> {
    let end = consumed
        .iter()
        .map(|span| span.start)
        .min()
        .unwrap_or(stem.len())
        .max(title_start);

    let mut title = normalize(&stem[title_start..end]);
    if title.is_empty() {
        title = normalize(&without_spans(&stem[title_start..], title_start, consumed));
    }

    (!title.is_empty()).then_some(title)
}

fn without_spans(text: &str, offset: usize, spans: &[Range<usize>]) -> String {
    text.char_indices()
        .map(|(i, c)| {
            let pos = i + offset;
            if spans.iter().any(|s| s.contains(&pos)) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Dots and underscores become spaces, runs of whitespace collapse, and
/// dangling separators or opening brackets left by the cut are trimmed.
fn normalize(text: &str) -> String {
    let spaced = text.replace(['.', '_'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    joined
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '(' | '['))
        .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ')' | ']'))
        .to_string()
}
