//! Phase 1: group raw lines into a forest by leading-tab depth.

use quinote_config::HARD_MAX_DEPTH;

use super::warnings::ParseWarning;

/// One input line and the lines nested beneath it, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNode<'a> {
    /// 1-based source line.
    pub line: usize,
    /// Leading tab count, after depth clamping.
    pub indent: usize,
    pub text: &'a str,
    pub children: Vec<RawNode<'a>>,
}

/// Counts the tab characters before the first other character.
pub fn indentation_level(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'\t').count()
}

/// Builds the indentation forest for `lines`.
///
/// Indentation beyond `max_depth` (itself capped at [`HARD_MAX_DEPTH`]) is
/// clamped so recursion never goes deeper than `max_depth + 1` frames; each
/// clamp is reported as a warning.
pub fn tokenize<S: AsRef<str>>(
    lines: &[S],
    max_depth: usize,
) -> (Vec<RawNode<'_>>, Vec<ParseWarning>) {
    let max_depth = max_depth.min(HARD_MAX_DEPTH);
    let tokenizer = IndentationTokenizer::new(lines, max_depth);
    let (forest, consumed) = tokenizer.build_level(0, 0);
    debug_assert_eq!(consumed, lines.len());
    (forest, tokenizer.warnings)
}

struct IndentationTokenizer<'a> {
    lines: Vec<&'a str>,
    indents: Vec<usize>,
    warnings: Vec<ParseWarning>,
}

impl<'a> IndentationTokenizer<'a> {
    fn new<S: AsRef<str>>(lines: &'a [S], max_depth: usize) -> Self {
        let mut warnings = Vec::new();
        let indents = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let indent = indentation_level(line.as_ref());
                if indent > max_depth {
                    let warning = ParseWarning::DepthClamped {
                        line: index + 1,
                        indent,
                        limit: max_depth,
                    };
                    log::warn!("{warning}");
                    warnings.push(warning);
                    max_depth
                } else {
                    indent
                }
            })
            .collect();

        Self {
            lines: lines.iter().map(AsRef::as_ref).collect(),
            indents,
            warnings,
        }
    }

    /// Collects the siblings starting at `start` whose indentation is at
    /// least `level`, returning them with the number of lines consumed.
    ///
    /// A line deeper than `level` directly after a node becomes that node's
    /// subtree, rooted at whatever depth the line has. A line that is deeper
    /// than `level` but was not claimed by a subtree (a partial dedent) is
    /// taken as a sibling.
    fn build_level(&self, start: usize, level: usize) -> (Vec<RawNode<'a>>, usize) {
        let mut nodes: Vec<RawNode<'a>> = Vec::new();
        let mut index = start;

        while index < self.lines.len() {
            let indent = self.indents[index];
            if indent < level {
                break;
            }

            nodes.push(RawNode {
                line: index + 1,
                indent,
                text: self.lines[index],
                children: Vec::new(),
            });
            index += 1;

            let Some(&next) = self.indents.get(index) else {
                break;
            };
            if next > level {
                let (children, consumed) = self.build_level(index, next);
                if let Some(parent) = nodes.last_mut() {
                    parent.children = children;
                }
                index += consumed;
            }
        }

        (nodes, index - start)
    }
}
