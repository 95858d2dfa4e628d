use std::collections::BTreeMap;

use super::model::{GenreAggregate, GenreMovie, GenreTable, NumericColumn};

/// Running sums for one genre, one slot per [`NumericColumn`].
#[derive(Debug, Default)]
struct Accumulator {
    records: usize,
    sums: [f64; 6],
    counts: [usize; 6],
}

impl Accumulator {
    fn push(&mut self, record: &GenreMovie<'_>) {
        self.records += 1;
        for col in NumericColumn::ALL {
            let v = record.value(col);
            // NaN marks a missing cell and is left out of the mean.
            if !v.is_nan() {
                self.sums[col.index()] += v;
                self.counts[col.index()] += 1;
            }
        }
    }

    fn mean(&self, col: NumericColumn) -> f64 {
        match self.counts[col.index()] {
            0 => f64::NAN,
            n => self.sums[col.index()] / n as f64,
        }
    }

    fn finish(self, genre: &str) -> GenreAggregate {
        GenreAggregate {
            genre: genre.to_string(),
            movies: self.records,
            budget_adj: self.mean(NumericColumn::BudgetAdj),
            popularity: self.mean(NumericColumn::Popularity),
            revenue_adj: self.mean(NumericColumn::RevenueAdj),
            runtime: self.mean(NumericColumn::Runtime),
            release_year: self.mean(NumericColumn::ReleaseYear),
            vote_average: self.mean(NumericColumn::VoteAverage),
        }
    }
}

/// Group exploded records by exact genre label and average every numeric
/// column. Rows come out in genre-name order.
pub fn aggregate_by_genre<'a, I>(records: I) -> GenreTable
where
    I: IntoIterator<Item = GenreMovie<'a>>,
{
    let mut groups: BTreeMap<&'a str, Accumulator> = BTreeMap::new();
    for record in records {
        groups.entry(record.genre).or_default().push(&record);
    }

    GenreTable::new(
        groups
            .into_iter()
            .map(|(genre, acc)| acc.finish(genre))
            .collect(),
    )
}
