use std::collections::HashSet;
use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{parse_coord, CliPlayer, Player, RandomPlayer};

#[test]
fn test_cli_player_reads_lines() {
    let mut player = CliPlayer::new(Cursor::new("A3\r\n b4 \n".as_bytes()));
    assert_eq!(player.next_input().unwrap().as_deref(), Some("A3"));
    assert_eq!(player.next_input().unwrap().as_deref(), Some(" b4 "));
    assert_eq!(player.next_input().unwrap(), None);
    assert!(!player.echo_input());
}

#[test]
fn test_random_player_covers_every_cell_once() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut player = RandomPlayer::new(&mut rng, 10);
    assert_eq!(player.remaining(), 100);
    let mut seen = HashSet::new();
    while let Some(token) = player.next_input().unwrap() {
        let coord = parse_coord(&token, 10).unwrap();
        assert!(seen.insert(coord));
    }
    assert_eq!(seen.len(), 100);
    assert!(player.echo_input());
}
