//! PgSongRepository against a real database

use pretty_assertions::assert_eq;
use sqlx::PgPool;

use music_library::domain::{NewSong, Pagination, SongPatch, SongRepository};
use music_library::infrastructure::repositories::PgSongRepository;
use music_library::shared::error::AppError;

fn new_song(group: &str, song: &str) -> NewSong {
    NewSong {
        group_name: group.into(),
        song: song.into(),
        release_date: "16.07.2006".into(),
        text: "A\\n\\nB".into(),
        lyrics: format!("{} lyrics", song),
        link: "https://example.com".into(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_create_assigns_id_and_lists(pool: PgPool) {
    let repo = PgSongRepository::new(pool);

    let created = repo.create(&new_song("Muse", "Starlight")).await.unwrap();
    let songs = repo.find_all("", Pagination::new(1, 10)).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(songs, vec![created]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_filter_matches_group_title_and_lyrics(pool: PgPool) {
    let repo = PgSongRepository::new(pool);
    repo.create(&new_song("Muse", "Starlight")).await.unwrap();
    repo.create(&new_song("Queen", "Bohemian Rhapsody")).await.unwrap();
    repo.create(&new_song("100% Band", "Under_score")).await.unwrap();

    let by_group = repo.find_all("muse", Pagination::new(1, 10)).await.unwrap();
    let by_lyrics = repo.find_all("RHAPSODY LYR", Pagination::new(1, 10)).await.unwrap();
    let literal = repo.find_all("0%", Pagination::new(1, 10)).await.unwrap();

    assert_eq!(by_group.len(), 1);
    assert_eq!(by_lyrics[0].group_name, "Queen");
    assert_eq!(literal.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_pagination_limits_rows(pool: PgPool) {
    let repo = PgSongRepository::new(pool);
    for i in 0..5 {
        repo.create(&new_song("Band", &format!("Song {i}"))).await.unwrap();
    }

    assert_eq!(repo.find_all("", Pagination::new(1, 2)).await.unwrap().len(), 2);
    assert_eq!(repo.find_all("", Pagination::new(3, 2)).await.unwrap().len(), 1);
    assert!(repo.find_all("", Pagination::new(4, 2)).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_text(pool: PgPool) {
    let repo = PgSongRepository::new(pool);
    let song = repo.create(&new_song("Muse", "Starlight")).await.unwrap();

    assert_eq!(repo.find_text(song.id).await.unwrap(), "A\\n\\nB");
    assert!(matches!(
        repo.find_text(song.id + 1).await,
        Err(AppError::NotFound(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_partial_update(pool: PgPool) {
    let repo = PgSongRepository::new(pool);
    let mut song = repo.create(&new_song("Muse", "Starlight")).await.unwrap();

    let patch = SongPatch {
        link: Some("https://example.org".into()),
        song: Some(String::new()),
        ..Default::default()
    };
    repo.update(song.id, &patch).await.unwrap();
    repo.update(song.id, &SongPatch::default()).await.unwrap();
    repo.update(song.id + 100, &patch).await.unwrap();

    song.link = "https://example.org".into();
    assert_eq!(repo.find_all("", Pagination::new(1, 10)).await.unwrap(), vec![song]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let repo = PgSongRepository::new(pool);
    let song = repo.create(&new_song("Muse", "Starlight")).await.unwrap();

    repo.delete(song.id).await.unwrap();

    assert!(matches!(repo.delete(song.id).await, Err(AppError::NotFound(_))));
    assert!(repo.find_all("", Pagination::new(1, 10)).await.unwrap().is_empty());
}
