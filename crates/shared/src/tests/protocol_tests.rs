use super::{parse_movie_body, MovieBody, MovieQuery};
use crate::domain::{ImdbId, RatingEntry};

const GUARDIANS_BODY: &str = r#"{
    "Title": "Guardians of the Galaxy Vol. 2",
    "Year": "2017",
    "Rated": "PG-13",
    "Released": "05 May 2017",
    "Runtime": "136 min",
    "Genre": "Action, Adventure, Comedy",
    "Director": "James Gunn",
    "Writer": "James Gunn, Dan Abnett, Andy Lanning",
    "Actors": "Chris Pratt, Zoe Saldana, Dave Bautista",
    "Plot": "The Guardians struggle to keep together as a team.",
    "Language": "English",
    "Country": "United States",
    "Awards": "Nominated for 1 Oscar. 15 wins & 60 nominations total",
    "Poster": "https://m.media-amazon.com/images/M/poster.jpg",
    "Ratings": [
        {"Source": "Internet Movie Database", "Value": "7.6/10"},
        {"Source": "Rotten Tomatoes", "Value": "85%"},
        {"Source": "Metacritic", "Value": "67/100"}
    ],
    "Metascore": "67",
    "imdbRating": "7.6",
    "imdbVotes": "772,341",
    "imdbID": "tt3896198",
    "Type": "movie",
    "DVD": "N/A",
    "BoxOffice": "$389,813,101",
    "Production": "N/A",
    "Website": "N/A",
    "Response": "True"
}"#;

#[test]
fn decodes_full_upstream_record() {
    let MovieBody::Record(record) = parse_movie_body(GUARDIANS_BODY.as_bytes()).expect("decode")
    else {
        panic!("expected a record");
    };

    assert_eq!(record.title.as_deref(), Some("Guardians of the Galaxy Vol. 2"));
    assert_eq!(record.box_office.as_deref(), Some("$389,813,101"));
    assert_eq!(record.imdb_rating.as_deref(), Some("7.6"));
    assert_eq!(record.imdb_id, Some(ImdbId::from("tt3896198")));
    assert_eq!(record.kind.as_deref(), Some("movie"));
    assert_eq!(record.dvd.as_deref(), Some("N/A"));
    assert_eq!(
        record.ratings,
        vec![
            RatingEntry {
                source: Some("Internet Movie Database".into()),
                value: Some("7.6/10".into()),
            },
            RatingEntry {
                source: Some("Rotten Tomatoes".into()),
                value: Some("85%".into()),
            },
            RatingEntry {
                source: Some("Metacritic".into()),
                value: Some("67/100".into()),
            },
        ]
    );
}

#[test]
fn missing_and_null_ratings_decode_as_empty() {
    for body in [r#"{"Title":"x"}"#, r#"{"Title":"x","Ratings":null}"#] {
        let MovieBody::Record(record) = parse_movie_body(body.as_bytes()).expect("decode") else {
            panic!("expected a record");
        };
        assert!(record.ratings.is_empty());
        assert_eq!(record.plot, None);
    }
}

#[test]
fn error_envelope_is_rejected_not_decoded_as_record() {
    let body = br#"{"Response":"False","Error":"Invalid API key!"}"#;
    match parse_movie_body(body).expect("decode") {
        MovieBody::Rejected(err) => assert_eq!(err.message, "Invalid API key!"),
        MovieBody::Record(_) => panic!("error envelope must not produce a record"),
    }
}

#[test]
fn malformed_bodies_fail_to_decode() {
    assert!(parse_movie_body(b"<html>502</html>").is_err());
    assert!(parse_movie_body(b"[1,2,3]").is_err());
    assert!(parse_movie_body(br#"{"Ratings": "nope"}"#).is_err());
}

#[test]
fn default_query_serializes_to_fixed_lookup() {
    let query = serde_json::to_value(MovieQuery::default()).expect("serialize");
    assert_eq!(query["i"], "tt3896198");
    assert_eq!(query["apikey"], "9799e6a9");
}

#[test]
fn placeholder_poster_is_treated_as_absent() {
    let MovieBody::Record(record) =
        parse_movie_body(br#"{"Poster":"N/A"}"#).expect("decode")
    else {
        panic!("expected a record");
    };
    assert_eq!(record.poster_url(), None);
}

#[test]
fn partial_rating_rows_are_kept() {
    let body = br#"{"Title":"T","Ratings":[{"Source":"IMDb"},{"Source":null,"Value":"85%"},{"Value":null}]}"#;
    let MovieBody::Record(record) = parse_movie_body(body).expect("decode") else {
        panic!("expected a record");
    };
    assert_eq!(
        record.ratings,
        vec![
            RatingEntry {
                source: Some("IMDb".into()),
                value: None,
            },
            RatingEntry {
                source: None,
                value: Some("85%".into()),
            },
            RatingEntry::default(),
        ]
    );
}
