// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, marker::PhantomData};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub struct Table<'a, T, C: Column<T>> {
    pub columns: &'a [C],
    pub separator: &'a str,
    pub data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            separator: "  ",
            data,
        }
    }

    fn compute_columns(&self, table: &[Vec<String>]) -> Vec<ColumnStylizer<'_, T, C>> {
        let max_lengths = get_column_max_width(self.columns, table);

        let mut columns = Vec::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            let padding_direction = col.padding_direction();
            let padding = if i == self.columns.len() - 1 && padding_direction == PaddingDirection::Left
            {
                None // Last column does not need padding if it's left-aligned
            } else {
                Some((max_lengths[i], padding_direction))
            };

            columns.push(ColumnStylizer {
                config: col,
                padding,
                _marker: PhantomData,
            });
        }
        columns
    }
}

impl<T, C: Column<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let columns = self.compute_columns(&table);

        let headers = columns.iter().map(|col| {
            let header = col.pad(col.config.header().to_string());
            header.bold().to_string()
        });
        writeln!(f, "{}", headers.collect::<Vec<_>>().join(self.separator))?;

        for (cells, row) in table.into_iter().zip(self.data) {
            let line = columns
                .iter()
                .zip(cells)
                .map(|(col, cell)| col.stylize_cell(row, cell))
                .collect::<Vec<_>>()
                .join(self.separator);
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

pub trait Column<T> {
    fn header(&self) -> &'static str;
    fn format(&self, data: &T) -> String;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

struct ColumnStylizer<'a, T, C: Column<T>> {
    config: &'a C,
    /// padding width and direction
    padding: Option<(usize, PaddingDirection)>,
    _marker: PhantomData<T>,
}

impl<T, C: Column<T>> ColumnStylizer<'_, T, C> {
    fn stylize_cell(&self, data: &T, cell: String) -> String {
        let cell = self.pad(cell);
        match self.config.get_color(data) {
            Some(color) => cell.color(color).to_string(),
            _ => cell,
        }
    }

    fn pad(&self, cell: String) -> String {
        // Pad by display width, `format!` counts chars.
        let fill = |width: usize| " ".repeat(width.saturating_sub(cell.width()));
        match self.padding {
            Some((width, PaddingDirection::Left)) => format!("{cell}{}", fill(width)),
            Some((width, PaddingDirection::Right)) => format!("{}{cell}", fill(width)),
            None => cell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn get_column_max_width<T, C: Column<T>>(columns: &[C], table: &[Vec<String>]) -> Vec<usize> {
    let mut max_width: Vec<usize> = columns.iter().map(|c| c.header().width()).collect();
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
