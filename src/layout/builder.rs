//! @acp:module "Layout Builder"
//! @acp:summary "Partition problems into pages and two-column row pairs"
//! @acp:domain layout
//! @acp:layer logic

use crate::problem::{Problem, ProblemSet};

use super::{Cell, Document, LayoutSpec, Page, PageStyle, RowPair};

/// Split problems into pages of `per_page`, each page into rows of two
///
/// Total and order-preserving: every problem lands in exactly one cell, read
/// left to right, top to bottom, page by page. A page break follows every
/// page except the last.
pub fn layout(problems: &[Problem], per_page: usize, per_column: usize) -> Vec<Page> {
    let capacity = LayoutSpec::new(per_page, per_column).page_capacity();
    let page_count = problems.len().div_ceil(capacity);

    problems
        .chunks(capacity)
        .enumerate()
        .map(|(index, chunk)| Page {
            rows: chunk.chunks(2).map(row_pair).collect(),
            page_break_after: index + 1 < page_count,
        })
        .collect()
}

fn row_pair(pair: &[Problem]) -> RowPair {
    RowPair {
        left: Cell::new(pair[0].text()),
        right: pair.get(1).map(|p| Cell::new(p.text())),
    }
}

/// Lay out a generated set as a titled document with the default style
pub fn build_document(problems: &ProblemSet, spec: LayoutSpec) -> Document {
    let pages = layout(problems.as_slice(), spec.per_page, spec.per_column);

    tracing::debug!(
        problems = problems.len(),
        pages = pages.len(),
        capacity = spec.page_capacity(),
        "built page layout"
    );

    Document {
        title: format!("{} practice ({})", problems.mode().label(), problems.range()),
        style: PageStyle::default(),
        pages,
    }
}
