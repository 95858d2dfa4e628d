use super::model::{GenreMovie, Movie};

/// Separator between genre names, also used as an optional wrapper.
pub const GENRE_DELIMITER: char = '|';

/// Genre names of one delimited string, wrapping delimiters stripped and
/// empty tokens skipped.
pub fn split_genres<'a>(genres: &'a str) -> impl Iterator<Item = &'a str> + Clone + 'a {
    genres
        .trim_matches(GENRE_DELIMITER)
        .split(GENRE_DELIMITER)
        .filter(|genre| !genre.is_empty())
}

/// One record per (movie, genre) pair, in row order and then split order.
///
/// Lazy and restartable: clone the iterator to walk the records again. A
/// movie without any genre yields nothing.
pub fn explode_genres<'a>(movies: &'a [Movie]) -> impl Iterator<Item = GenreMovie<'a>> + Clone + 'a {
    movies.iter().flat_map(|movie| {
        split_genres(&movie.genres).map(move |genre| GenreMovie { genre, movie })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(genres: &str, popularity: f64) -> Movie {
        Movie {
            genres: genres.to_string(),
            popularity,
            vote_average: 6.4,
            runtime: 104.0,
            budget_adj: 2.5e7,
            revenue_adj: 9.0e7,
            release_year: 1997,
        }
    }

    #[test]
    fn two_genres_make_two_records() {
        let movies = vec![movie("Action|Comedy", 2.0)];
        let records: Vec<GenreMovie<'_>> = explode_genres(&movies).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].genre, "Action");
        assert_eq!(records[1].genre, "Comedy");
        for record in &records {
            assert_eq!(*record.movie, movies[0]);
        }
    }

    #[test]
    fn wrapping_delimiters_are_stripped() {
        let movies = vec![movie("|Horror|", 1.0)];
        let genres: Vec<&str> = explode_genres(&movies).map(|r| r.genre).collect();
        assert_eq!(genres, ["Horror"]);
    }

    #[test]
    fn empty_and_bare_delimiters_yield_nothing() {
        for genres in ["", "|", "||"] {
            assert_eq!(split_genres(genres).count(), 0, "{genres:?}");
        }
        let movies = vec![movie("", 1.0)];
        assert_eq!(explode_genres(&movies).count(), 0);
    }

    #[test]
    fn inner_empty_tokens_are_skipped() {
        let genres: Vec<&str> = split_genres("Drama||Romance").collect();
        assert_eq!(genres, ["Drama", "Romance"]);
    }

    #[test]
    fn preserves_row_then_split_order() {
        let movies = vec![
            movie("Western|Drama", 1.0),
            movie("", 2.0),
            movie("Crime", 3.0),
        ];
        let pairs: Vec<(&str, f64)> = explode_genres(&movies)
            .map(|r| (r.genre, r.movie.popularity))
            .collect();
        assert_eq!(pairs, [("Western", 1.0), ("Drama", 1.0), ("Crime", 3.0)]);
    }

    #[test]
    fn iterator_is_restartable() {
        let movies = vec![movie("Family|Animation", 1.0), movie("Music", 0.5)];
        let records = explode_genres(&movies);
        let first: Vec<_> = records.clone().collect();
        let second: Vec<_> = records.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
