use structopt::StructOpt;

macro_rules! assert_match {
    ($a:expr => $b:pat) => {
        assert!(match $a {
            $b => true,
            _ => false,
        });
    };
}

fn parse(args: &[&str]) -> Result<ojcrawl::Opt, structopt::clap::Error> {
    ojcrawl::Opt::from_iter_safe(args)
}

#[test]
fn run_with_no_args() {
    assert_match!(parse(&[""]) => Err(_));
}

#[test]
fn parse_leetcode_commands() {
    for sub in &["profile-meta", "recent-ac", "submit-stats", "public-profile", "crawl"] {
        assert_match!(parse(&["ojcrawl", "leetcode", sub, "lee215"]) => Ok(_));
    }
    assert_match!(parse(&["ojcrawl", "leetcode", "crawl", "lee215", "--sleep", "0.5"]) => Ok(_));
    assert_match!(parse(&["ojcrawl", "-o", "json", "leetcode", "recent-ac", "lee215"]) => Ok(_));
}

#[test]
fn reject_blank_username() {
    assert_match!(parse(&["ojcrawl", "leetcode", "profile-meta", " "]) => Err(_));
    assert_match!(parse(&["ojcrawl", "leetcode", "crawl"]) => Err(_));
}

#[test]
fn parse_luogu_practice() {
    assert_match!(parse(&["ojcrawl", "luogu", "practice", "108"]) => Ok(_));
    assert_match!(parse(&["ojcrawl", "luogu", "practice", "108", "--sleep", "0"]) => Ok(_));
}

#[test]
fn reject_invalid_uid() {
    assert_match!(parse(&["ojcrawl", "luogu", "practice", "0"]) => Err(_));
    assert_match!(parse(&["ojcrawl", "luogu", "practice", "-3"]) => Err(_));
    assert_match!(parse(&["ojcrawl", "luogu", "practice", "abc"]) => Err(_));
}

#[test]
fn reject_sleep_out_of_range() {
    assert_match!(parse(&["ojcrawl", "luogu", "practice", "108", "--sleep", "11"]) => Err(_));
    assert_match!(parse(&["ojcrawl", "leetcode", "crawl", "lee215", "--sleep", "-1"]) => Err(_));
}

#[test]
fn reject_unknown_output_format() {
    assert_match!(parse(&["ojcrawl", "-o", "xml", "show"]) => Err(_));
    assert_match!(parse(&["ojcrawl", "-o", "yaml", "show"]) => Ok(_));
}
