/// Enrichment aggregation
///
/// Gathers everything needed to render one recommendation page for one
/// resolved movie: details, one poster per recommended title, the cast
/// sequences, and per-person details. The per-title and per-person loops
/// are sequential by contract; total latency scales linearly with the
/// recommendation and cast list lengths.
use crate::{
    error::{AppError, AppResult},
    format,
    models::{CastDetails, RenderPayload, ResolvedTitle},
    services::providers::RecommendationBackend,
};

/// Builds the full render payload for a resolved movie and its
/// recommendation list.
///
/// Steps run in a fixed order: details, posters, cast, person details,
/// assembly. Any hard failure aborts the whole aggregation; there is no
/// partial payload.
pub async fn build_payload(
    backend: &dyn RecommendationBackend,
    image_base: &str,
    resolved: &ResolvedTitle,
    rec_movies: Vec<String>,
) -> AppResult<RenderPayload> {
    let details = backend.movie_details(resolved.id).await?;
    let rec_posters = fetch_posters(backend, image_base, &rec_movies).await?;

    let cast = backend.movie_cast(resolved.id).await?;
    if !cast.is_aligned() {
        return Err(AppError::Backend(format!(
            "Cast sequences are misaligned for movie {}",
            resolved.id
        )));
    }
    let cast_details = fetch_cast_details(backend, &cast.cast_ids).await?;

    tracing::info!(
        id = resolved.id,
        recommendations = rec_movies.len(),
        cast = cast.len(),
        "Enrichment complete"
    );

    let genres = details
        .genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(RenderPayload {
        title: resolved.title.clone(),
        cast_ids: to_json_list(&cast.cast_ids)?,
        cast_names: to_json_list(&cast.cast_names)?,
        cast_chars: to_json_list(&cast.cast_chars)?,
        cast_profiles: to_json_list(&cast.cast_profiles)?,
        cast_bdays: to_json_list(&cast_details.cast_bdays)?,
        cast_bios: to_json_list(&cast_details.cast_bios)?,
        cast_places: to_json_list(&cast_details.cast_places)?,
        imdb_id: details.imdb_id.unwrap_or_default(),
        poster: poster_url(image_base, details.poster_path.as_deref()),
        genres,
        overview: details.overview.unwrap_or_default(),
        rating: details.vote_average,
        vote_count: format::format_count(details.vote_count),
        release_date: format::format_date(details.release_date.as_deref()),
        runtime: format::format_runtime(details.runtime),
        status: details.status.unwrap_or_default(),
        rec_movies: to_json_list(&rec_movies)?,
        rec_posters: to_json_list(&rec_posters)?,
    })
}

/// Looks up one poster per recommended title, sequentially and in list
/// order, so `rec_posters[i]` always matches `rec_movies[i]`.
///
/// A title with zero search results contributes an empty string at its
/// index rather than failing the batch.
async fn fetch_posters(
    backend: &dyn RecommendationBackend,
    image_base: &str,
    titles: &[String],
) -> AppResult<Vec<String>> {
    let mut posters = Vec::with_capacity(titles.len());
    for title in titles {
        let response = backend.poster_search(title).await?;
        let poster = response
            .results
            .first()
            .map(|hit| poster_url(image_base, hit.poster_path.as_deref()))
            .unwrap_or_default();
        posters.push(poster);
    }
    Ok(posters)
}

/// Fetches person details for every cast id, sequentially and in cast
/// order, keeping the three accumulated sequences aligned with the cast
/// sequences.
async fn fetch_cast_details(
    backend: &dyn RecommendationBackend,
    cast_ids: &[String],
) -> AppResult<CastDetails> {
    let mut details = CastDetails::default();
    for id in cast_ids {
        let person = backend.person(id).await?;
        details
            .cast_bdays
            .push(format::format_date(person.birthday.as_deref()));
        details.cast_bios.push(person.biography.unwrap_or_default());
        details
            .cast_places
            .push(person.place_of_birth.unwrap_or_default());
    }
    Ok(details)
}

fn poster_url(image_base: &str, poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) => format!("{}{}", image_base, path),
        None => String::new(),
    }
}

fn to_json_list(values: &[String]) -> AppResult<String> {
    serde_json::to_string(values).map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Genre, MovieCast, MovieDetails, PersonDetails, PosterHit, PosterResponse,
    };
    use crate::services::providers::MockRecommendationBackend;
    use mockall::predicate::eq;
    use mockall::Sequence;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";

    fn resolved() -> ResolvedTitle {
        ResolvedTitle {
            id: 27205,
            title: "Inception".to_string(),
        }
    }

    fn details_fixture() -> MovieDetails {
        MovieDetails {
            imdb_id: Some("tt1375666".to_string()),
            poster_path: Some("/inception.jpg".to_string()),
            genres: vec![
                Genre {
                    name: "Action".to_string(),
                },
                Genre {
                    name: "Science Fiction".to_string(),
                },
            ],
            overview: Some("A thief who steals corporate secrets".to_string()),
            vote_average: 8.4,
            vote_count: 34495,
            release_date: Some("2010-07-15".to_string()),
            runtime: Some(148),
            status: Some("Released".to_string()),
        }
    }

    fn empty_cast() -> MovieCast {
        MovieCast::default()
    }

    #[tokio::test]
    async fn test_posters_align_with_titles_and_keep_holes() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_movie_details()
            .returning(|_| Ok(MovieDetails::default()));
        backend.expect_movie_cast().returning(|_| Ok(empty_cast()));

        let mut seq = Sequence::new();
        backend
            .expect_poster_search()
            .with(eq("Interstellar"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(PosterResponse {
                    results: vec![PosterHit {
                        poster_path: Some("/interstellar.jpg".to_string()),
                    }],
                })
            });
        backend
            .expect_poster_search()
            .with(eq("Obscure Film"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(PosterResponse { results: vec![] }));
        backend
            .expect_poster_search()
            .with(eq("Memento"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(PosterResponse {
                    results: vec![PosterHit {
                        poster_path: Some("/memento.jpg".to_string()),
                    }],
                })
            });

        let recs = vec![
            "Interstellar".to_string(),
            "Obscure Film".to_string(),
            "Memento".to_string(),
        ];
        let payload = build_payload(&backend, IMAGE_BASE, &resolved(), recs)
            .await
            .unwrap();

        assert_eq!(
            payload.rec_movies,
            r#"["Interstellar","Obscure Film","Memento"]"#
        );
        // The missing poster is an empty string at the same index, not an
        // omitted entry
        assert_eq!(
            payload.rec_posters,
            format!(
                r#"["{base}/interstellar.jpg","","{base}/memento.jpg"]"#,
                base = IMAGE_BASE
            )
        );
    }

    #[tokio::test]
    async fn test_person_lookups_align_with_cast_order() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_movie_details()
            .returning(|_| Ok(MovieDetails::default()));
        backend.expect_movie_cast().returning(|_| {
            Ok(MovieCast {
                cast_ids: vec!["6193".to_string(), "24045".to_string()],
                cast_names: vec!["Leonardo DiCaprio".to_string(), "Joseph Gordon-Levitt".to_string()],
                cast_chars: vec!["Cobb".to_string(), "Arthur".to_string()],
                cast_profiles: vec!["/a.jpg".to_string(), "/b.jpg".to_string()],
            })
        });

        let mut seq = Sequence::new();
        backend
            .expect_person()
            .with(eq("6193"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(PersonDetails {
                    birthday: Some("1974-11-11".to_string()),
                    biography: Some("Actor and producer.".to_string()),
                    place_of_birth: Some("Los Angeles".to_string()),
                })
            });
        backend
            .expect_person()
            .with(eq("24045"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(PersonDetails::default()));

        let payload = build_payload(&backend, IMAGE_BASE, &resolved(), vec![])
            .await
            .unwrap();

        assert_eq!(payload.cast_bdays, r#"["Nov 11 1974","N/A"]"#);
        assert_eq!(payload.cast_bios, r#"["Actor and producer.",""]"#);
        assert_eq!(payload.cast_places, r#"["Los Angeles",""]"#);
    }

    #[tokio::test]
    async fn test_misaligned_cast_is_a_backend_error() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_movie_details()
            .returning(|_| Ok(MovieDetails::default()));
        backend.expect_movie_cast().returning(|_| {
            Ok(MovieCast {
                cast_ids: vec!["6193".to_string()],
                cast_names: vec![],
                cast_chars: vec![],
                cast_profiles: vec![],
            })
        });

        let err = build_payload(&backend, IMAGE_BASE, &resolved(), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Backend(_)));
    }

    #[tokio::test]
    async fn test_payload_derived_fields() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_movie_details()
            .with(eq(27205))
            .times(1)
            .returning(|_| Ok(details_fixture()));
        backend.expect_movie_cast().returning(|_| Ok(empty_cast()));

        let payload = build_payload(&backend, IMAGE_BASE, &resolved(), vec![])
            .await
            .unwrap();

        assert_eq!(payload.title, "Inception");
        assert_eq!(payload.imdb_id, "tt1375666");
        assert_eq!(
            payload.poster,
            format!("{}/inception.jpg", IMAGE_BASE)
        );
        assert_eq!(payload.genres, "Action, Science Fiction");
        assert_eq!(payload.rating, 8.4);
        assert_eq!(payload.vote_count, "34,495");
        assert_eq!(payload.release_date, "Jul 15 2010");
        assert_eq!(payload.runtime, "2 hour(s) 28 min(s)");
        assert_eq!(payload.status, "Released");
        assert_eq!(payload.cast_ids, "[]");
        assert_eq!(payload.rec_movies, "[]");
    }

    #[tokio::test]
    async fn test_missing_details_fields_fall_back() {
        let mut backend = MockRecommendationBackend::new();
        backend
            .expect_movie_details()
            .returning(|_| Ok(MovieDetails::default()));
        backend.expect_movie_cast().returning(|_| Ok(empty_cast()));

        let payload = build_payload(&backend, IMAGE_BASE, &resolved(), vec![])
            .await
            .unwrap();

        assert_eq!(payload.imdb_id, "");
        assert_eq!(payload.poster, "");
        assert_eq!(payload.genres, "");
        assert_eq!(payload.runtime, "N/A");
        assert_eq!(payload.release_date, "N/A");
        assert_eq!(payload.vote_count, "0");
    }
}
