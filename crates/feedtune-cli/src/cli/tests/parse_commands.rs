//! Tests for set, list, remove, info, preview.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use feedtune_core::settings::MediaHandling;

#[test]
fn cli_parse_list() {
    match parse(&["feedtune", "list"]) {
        CliCommand::List => {}
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_remove() {
    match parse(&["feedtune", "remove", "https://www.example.com/feed"]) {
        CliCommand::Remove { domain } => assert_eq!(domain, "https://www.example.com/feed"),
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_info() {
    match parse(&["feedtune", "info", "careers.example.com"]) {
        CliCommand::Info { url } => assert_eq!(url, "careers.example.com"),
        _ => panic!("expected Info"),
    }
}

#[test]
fn cli_parse_set_defaults() {
    match parse(&["feedtune", "set", "example.com"]) {
        CliCommand::Set(args) => {
            assert_eq!(args.domain, "example.com");
            assert!(args.title_template.is_none());
            assert!(args.hashtags.is_empty());
            assert!(args.media.is_none());
            assert!(args.send_mode.is_none());
            assert!(args.replace.is_empty());
            assert!(!args.disable);
            assert!(!args.enable);
        }
        _ => panic!("expected Set"),
    }
}

#[test]
fn cli_parse_set_repeated_flags() {
    match parse(&[
        "feedtune",
        "set",
        "example.com",
        "--hashtag",
        "#A",
        "--hashtag",
        "#B",
        "--remove-pattern",
        "^ad$",
        "--replace",
        "a",
        "b",
        "--replace",
        "c",
        "d",
        "--media",
        "only_media",
        "--style",
        "-1",
    ]) {
        CliCommand::Set(args) => {
            assert_eq!(args.hashtags, vec!["#A", "#B"]);
            assert_eq!(args.remove_patterns, vec!["^ad$"]);
            assert_eq!(args.replace, vec!["a", "b", "c", "d"]);
            assert_eq!(args.media, Some(MediaHandling::OnlyMedia));
            assert_eq!(args.style, Some(-1));
        }
        _ => panic!("expected Set"),
    }
}

#[test]
fn cli_rejects_unknown_media() {
    assert!(Cli::try_parse_from(["feedtune", "set", "example.com", "--media", "sometimes"]).is_err());
}

#[test]
fn cli_rejects_enable_with_disable() {
    assert!(Cli::try_parse_from(["feedtune", "set", "example.com", "--enable", "--disable"]).is_err());
}

#[test]
fn cli_parse_preview() {
    match parse(&[
        "feedtune",
        "preview",
        "https://example.com/a",
        "--title",
        "Hello",
        "--feed-title",
        "MyFeed",
        "--content-file",
        "/tmp/body.txt",
    ]) {
        CliCommand::Preview {
            url,
            title,
            feed_title,
            content_file,
        } => {
            assert_eq!(url, "https://example.com/a");
            assert_eq!(title, "Hello");
            assert_eq!(feed_title, "MyFeed");
            assert_eq!(content_file.as_deref(), Some(std::path::Path::new("/tmp/body.txt")));
        }
        _ => panic!("expected Preview"),
    }
}

#[test]
fn cli_preview_requires_title() {
    assert!(Cli::try_parse_from(["feedtune", "preview", "https://example.com/a"]).is_err());
}
