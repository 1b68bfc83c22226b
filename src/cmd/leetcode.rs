use std::fmt;

use anyhow::Context as _;
use ojcrawl_leetcode::{
    AcSubmission, Crawl, LeetcodeClient, ProfileMeta, PublicProfile, SubmitStats,
};
use ojcrawl_util::model::{ServiceKind, Username};
use serde::Serialize;
use structopt::StructOpt;

use crate::cmd::{Outcome, Run, SleepOpt};
use crate::{Console, GlobalOpt, Result};

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct LeetcodeOpt {
    #[structopt(subcommand)]
    cmd: LeetcodeCmd,
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub enum LeetcodeCmd {
    /// Checks that the profile page exists and reads its summary
    ProfileMeta(UserArgs),
    /// Lists recently accepted submissions
    RecentAc(UserArgs),
    /// Shows submission and question progress counts
    SubmitStats(UserArgs),
    /// Shows the public profile
    PublicProfile(UserArgs),
    /// Fetches profile meta, recent accepted submissions and stats at once
    Crawl(UserArgs),
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserArgs {
    /// User slug on LeetCode
    username: Username,
    #[structopt(flatten)]
    sleep: SleepOpt,
}

impl UserArgs {
    fn client(&self, global_opt: &GlobalOpt, cnsl: &mut Console) -> Result<LeetcodeClient> {
        let conf = global_opt
            .load_config(cnsl)?
            .client_config(ServiceKind::Leetcode, self.sleep.get());
        LeetcodeClient::new(conf).context("Could not create LeetCode client")
    }
}

impl Run for LeetcodeOpt {
    fn run(&self, global_opt: &GlobalOpt, cnsl: &mut Console) -> Result<Box<dyn Outcome>> {
        match &self.cmd {
            LeetcodeCmd::ProfileMeta(args) => {
                let meta = args
                    .client(global_opt, cnsl)?
                    .fetch_profile_meta(args.username.as_str(), cnsl)
                    .context("Could not fetch profile meta")?;
                Ok(Box::new(ProfileMetaOutcome { meta }))
            }
            LeetcodeCmd::RecentAc(args) => {
                let submissions = args
                    .client(global_opt, cnsl)?
                    .fetch_recent_ac(args.username.as_str(), cnsl)
                    .context("Could not fetch recent accepted submissions")?;
                Ok(Box::new(RecentAcOutcome {
                    recent_accepted: RecentAcRow::from_all(submissions),
                }))
            }
            LeetcodeCmd::SubmitStats(args) => {
                let stats = args
                    .client(global_opt, cnsl)?
                    .fetch_submit_stats(args.username.as_str(), cnsl)
                    .context("Could not fetch submit stats")?;
                Ok(Box::new(SubmitStatsOutcome { stats }))
            }
            LeetcodeCmd::PublicProfile(args) => {
                let profile = args
                    .client(global_opt, cnsl)?
                    .fetch_public_profile(args.username.as_str(), cnsl)
                    .context("Could not fetch public profile")?;
                Ok(Box::new(PublicProfileOutcome { profile }))
            }
            LeetcodeCmd::Crawl(args) => {
                let crawl = args
                    .client(global_opt, cnsl)?
                    .crawl(args.username.as_str(), cnsl)
                    .with_context(|| format!("Could not crawl user : {}", args.username))?;
                Ok(Box::new(CrawlOutcome::from(crawl)))
            }
        }
    }
}

/// Accepted submission with its timestamp rendered in local time.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecentAcRow {
    #[serde(flatten)]
    submission: AcSubmission,
    time: String,
}

impl RecentAcRow {
    fn from_all(submissions: Vec<AcSubmission>) -> Vec<Self> {
        submissions
            .into_iter()
            .map(|submission| Self {
                time: submission.local_time(),
                submission,
            })
            .collect()
    }
}

impl fmt::Display for RecentAcRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}  {} ({})",
            self.time, self.submission.title, self.submission.slug
        )
    }
}

fn fmt_meta(meta: &ProfileMeta, f: &mut fmt::Formatter) -> fmt::Result {
    if meta.exists {
        let og_title = meta.og_title.as_deref().unwrap_or_default();
        writeln!(f, "{} : {}", meta.url_final, og_title)?;
        write!(f, "{}", meta.og_description.as_deref().unwrap_or_default())
    } else {
        let reason = meta.reason.as_deref().unwrap_or("unknown reason");
        write!(f, "Profile not found ({}) : {}", reason, meta.url_final)
    }
}

fn fmt_stats(stats: &SubmitStats, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "Accepted questions : {}", stats.total_accepted())?;
    let progress = &stats.user_profile_user_question_progress;
    for count in &progress.num_accepted_questions {
        writeln!(f, "  {:<8} {}", count.difficulty, count.count)?;
    }
    let submissions = &stats.user_profile_user_question_submit_stats;
    for (ac, total) in submissions
        .ac_submission_num
        .iter()
        .zip(&submissions.total_submission_num)
    {
        writeln!(
            f,
            "Submissions {:<8} {} / {}",
            ac.difficulty, ac.count, total.count
        )?;
    }
    Ok(())
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileMetaOutcome {
    meta: ProfileMeta,
}

impl fmt::Display for ProfileMetaOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_meta(&self.meta, f)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecentAcOutcome {
    recent_accepted: Vec<RecentAcRow>,
}

impl fmt::Display for RecentAcOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.recent_accepted.is_empty() {
            return write!(f, "No accepted submissions");
        }
        let lines: Vec<String> = self.recent_accepted.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubmitStatsOutcome {
    stats: SubmitStats,
}

impl fmt::Display for SubmitStatsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_stats(&self.stats, f)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicProfileOutcome {
    profile: PublicProfile,
}

impl fmt::Display for PublicProfileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({})\n{}",
            self.profile.user_slug, self.profile.real_name, self.profile.user_avatar
        )
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrawlOutcome {
    meta: ProfileMeta,
    recent_accepted: Vec<RecentAcRow>,
    stats: Option<SubmitStats>,
}

impl From<Crawl> for CrawlOutcome {
    fn from(crawl: Crawl) -> Self {
        Self {
            meta: crawl.meta,
            recent_accepted: RecentAcRow::from_all(crawl.recent_accepted),
            stats: crawl.stats,
        }
    }
}

impl fmt::Display for CrawlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_meta(&self.meta, f)?;
        if let Some(stats) = &self.stats {
            write!(f, "\n\n")?;
            fmt_stats(stats, f)?;
        }
        for row in &self.recent_accepted {
            write!(f, "\n{}", row)?;
        }
        Ok(())
    }
}
