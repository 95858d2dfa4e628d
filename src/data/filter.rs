use std::collections::HashSet;

use super::model::{Movie, NumericColumn};

// ---------------------------------------------------------------------------
// Row filter: zero values are missing-data sentinels
// ---------------------------------------------------------------------------

/// Whether any numeric field of the movie is exactly zero.
///
/// The genre string never counts, even when it reads `"0"`. `NaN` is not
/// zero.
pub fn has_zero_value(movie: &Movie) -> bool {
    NumericColumn::ALL
        .into_iter()
        .any(|col| movie.value(col) == 0.0)
}

/// Drop every movie with a zero in any numeric column.
///
/// This also discards genuine zero-budget films; the sentinel reading of zero
/// is kept as-is since the per-genre figures depend on it.
pub fn drop_zero_rows(mut movies: Vec<Movie>) -> Vec<Movie> {
    let before = movies.len();
    movies.retain(|movie| !has_zero_value(movie));
    log::debug!(
        "Zero-value filter kept {} of {} rows",
        movies.len(),
        before
    );
    movies
}

// ---------------------------------------------------------------------------
// Duplicate detection
// ---------------------------------------------------------------------------

/// Number of movies identical to an earlier one. Duplicates are reported,
/// never removed.
pub fn duplicate_count(movies: &[Movie]) -> usize {
    let mut seen = HashSet::with_capacity(movies.len());
    movies
        .iter()
        .filter(|movie| !seen.insert(row_key(movie)))
        .count()
}

fn row_key(movie: &Movie) -> (&str, [u64; 5], i32) {
    (
        movie.genres.as_str(),
        [
            float_key(movie.popularity),
            float_key(movie.vote_average),
            float_key(movie.runtime),
            float_key(movie.budget_adj),
            float_key(movie.revenue_adj),
        ],
        movie.release_year,
    )
}

/// Bit pattern under which `0.0 == -0.0` and all `NaN`s compare equal.
fn float_key(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(genres: &str, budget_adj: f64, runtime: f64) -> Movie {
        Movie {
            genres: genres.to_string(),
            popularity: 1.25,
            vote_average: 6.1,
            runtime,
            budget_adj,
            revenue_adj: 4.0e7,
            release_year: 2004,
        }
    }

    #[test]
    fn drops_rows_with_any_zero() {
        let mut free_film = movie("Documentary", 0.0, 95.0);
        free_film.revenue_adj = 1.0e5;
        let kept = drop_zero_rows(vec![
            movie("Action", 3.0e7, 110.0),
            free_film,
            movie("Comedy", 1.0e7, 0.0),
            movie("Drama", 2.0e6, 101.0),
        ]);

        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|m| !has_zero_value(m)));
        assert_eq!(kept[0].genres, "Action");
        assert_eq!(kept[1].genres, "Drama");
    }

    #[test]
    fn no_output_row_ever_contains_zero() {
        let values = [0.0, -0.0, 1.0, f64::NAN];
        let mut movies = Vec::new();
        for &budget in &values {
            for &runtime in &values {
                for &popularity in &values {
                    let mut m = movie("Western", budget, runtime);
                    m.popularity = popularity;
                    movies.push(m);
                }
            }
        }
        let kept = drop_zero_rows(movies);
        assert_eq!(kept.len(), 8);
        for m in &kept {
            for col in NumericColumn::ALL {
                assert!(m.value(col) != 0.0, "{col} is zero in {m:?}");
            }
        }
    }

    #[test]
    fn zero_genre_text_is_not_a_zero_value() {
        assert!(!has_zero_value(&movie("0", 1.0, 1.0)));
    }

    #[test]
    fn zero_release_year_is_dropped() {
        let mut m = movie("Drama", 1.0, 1.0);
        m.release_year = 0;
        assert!(has_zero_value(&m));
    }

    #[test]
    fn counts_exact_duplicates_only() {
        let a = movie("Action|Thriller", 3.0e7, 92.0);
        let mut b = a.clone();
        b.runtime = 93.0;
        let movies = vec![a.clone(), b, a.clone(), a];
        assert_eq!(duplicate_count(&movies), 2);
        assert_eq!(duplicate_count(&[]), 0);
    }

    #[test]
    fn signed_zeros_and_nans_count_as_duplicates() {
        let a = movie("Documentary", 0.0, f64::NAN);
        let b = movie("Documentary", -0.0, -f64::NAN);
        assert_eq!(duplicate_count(&[a, b]), 1);
    }
}
