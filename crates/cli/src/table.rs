//! Sorting and paging of the collection for display.

use std::cmp::Ordering;
use std::ops::Range;

use clap::ValueEnum;
use data_loader::Movie;

/// Table columns; every one of them is sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Column {
    Name,
    Year,
    Series,
    Quality,
    Hindi,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Name,
        Column::Year,
        Column::Series,
        Column::Quality,
        Column::Hindi,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Year => "Year",
            Column::Series => "Series Name",
            Column::Quality => "Print Quality",
            Column::Hindi => "Hindi",
        }
    }

    pub fn cell(self, movie: &Movie) -> String {
        match self {
            Column::Name => movie.name.clone().unwrap_or_default(),
            Column::Year => movie.year.map(|y| y.to_string()).unwrap_or_default(),
            Column::Series => movie.series_name.clone().unwrap_or_default(),
            Column::Quality => movie.print_quality.clone().unwrap_or_default(),
            Column::Hindi => match movie.is_hindi {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => String::new(),
            },
        }
    }

    fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            Column::Name => a.name.cmp(&b.name),
            Column::Year => a.year.cmp(&b.year),
            Column::Series => a.series_name.cmp(&b.series_name),
            Column::Quality => a.print_quality.cmp(&b.print_quality),
            Column::Hindi => a.is_hindi.cmp(&b.is_hindi),
        }
    }
}

/// Stable sort by one column; missing values sort first when ascending.
pub fn sort_movies(movies: &mut [Movie], column: Column, descending: bool) {
    movies.sort_by(|a, b| {
        let ordering = column.compare(a, b);
        if descending { ordering.reverse() } else { ordering }
    });
}

/// Number of pages needed for `total` rows; at least one.
pub fn page_count(total: usize, rows: usize) -> usize {
    if rows == 0 {
        return 1;
    }
    total.div_ceil(rows).max(1)
}

/// Row range shown on 1-based `page`. Pages past the end are empty.
pub fn page_range(total: usize, page: usize, rows: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(rows).min(total);
    let end = start.saturating_add(rows).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies() -> Vec<Movie> {
        vec![
            Movie { year: Some(1995), ..Movie::new("Heat") },
            Movie { year: None, ..Movie::new("Untitled") },
            Movie { year: Some(1975), is_hindi: Some(true), ..Movie::new("Sholay") },
        ]
    }

    fn names(movies: &[Movie]) -> Vec<&str> {
        movies.iter().filter_map(|m| m.name.as_deref()).collect()
    }

    #[test]
    fn test_sort_by_year() {
        let mut rows = movies();
        sort_movies(&mut rows, Column::Year, false);
        assert_eq!(names(&rows), ["Untitled", "Sholay", "Heat"]);

        sort_movies(&mut rows, Column::Year, true);
        assert_eq!(names(&rows), ["Heat", "Sholay", "Untitled"]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut rows = movies();
        sort_movies(&mut rows, Column::Name, false);
        assert_eq!(names(&rows), ["Heat", "Sholay", "Untitled"]);
    }

    #[test]
    fn test_cells() {
        let rows = movies();
        assert_eq!(Column::Year.cell(&rows[1]), "");
        assert_eq!(Column::Hindi.cell(&rows[2]), "yes");
        assert_eq!(Column::Hindi.cell(&rows[0]), "");
    }

    #[test]
    fn test_paging() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);

        assert_eq!(page_range(25, 1, 10), 0..10);
        assert_eq!(page_range(25, 3, 10), 20..25);
        assert_eq!(page_range(25, 4, 10), 25..25);
        assert_eq!(page_range(25, 0, 10), 0..10);
    }
}
