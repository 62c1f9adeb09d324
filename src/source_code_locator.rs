//! Struct used to efficiently slice source code at (row, column) Locations.

use once_cell::unsync::OnceCell;

use crate::ast::types::Range;

pub struct SourceCodeLocator<'a> {
    contents: &'a str,
    offsets: OnceCell<Vec<Vec<usize>>>,
}

pub fn compute_offsets(contents: &str) -> Vec<Vec<usize>> {
    let mut offsets = vec![vec![]];
    let mut line_index = 0;
    let mut char_index = 0;
    let mut newline = false;
    for (i, char) in contents.char_indices() {
        offsets[line_index].push(i);

        newline = char == '\n';
        if newline {
            line_index += 1;
            offsets.push(vec![]);
            char_index = i + char.len_utf8();
        }
    }
    // If we end in a newline, add an extra character to indicate the start of that line.
    if newline {
        offsets[line_index].push(char_index);
    }
    offsets
}

impl<'a> SourceCodeLocator<'a> {
    pub fn new(contents: &'a str) -> Self {
        SourceCodeLocator {
            contents,
            offsets: OnceCell::new(),
        }
    }

    fn get_or_init_offsets(&self) -> &Vec<Vec<usize>> {
        self.offsets.get_or_init(|| compute_offsets(self.contents))
    }

    /// Slice the source text covered by a node's range. Ranges that end at
    /// the close of the file map one-past-the-end of the offset table.
    pub fn slice_source_code_range(&self, range: &Range) -> &'a str {
        let offsets = self.get_or_init_offsets();
        let start = offsets[range.location.row() - 1][range.location.column()];
        let end = if range.end_location.row() - 1 < offsets.len()
            && range.end_location.column() < offsets[range.end_location.row() - 1].len()
        {
            offsets[range.end_location.row() - 1][range.end_location.column()]
        } else {
            self.contents.len()
        };
        &self.contents[start..end]
    }
}
