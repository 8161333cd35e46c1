use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use job_seeker::agency::{
    AgencyError, FixedClock, HumanResourcesAgency, TransientCandidateFolder,
};
use job_seeker::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date the demo applications are filed on (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let clock = Arc::new(FixedClock::new(today));
    let mut agency =
        HumanResourcesAgency::new(TransientCandidateFolder::new()).with_clock(clock.clone());

    println!("Job seeker demo (applications filed on {today})");

    println!("\nDuplicate applications");
    agency.register("alice")?;
    agency.apply_to_job("alice", "Java", "Acme", "desc")?;
    report(
        "alice re-applies to Java at Acme",
        agency.apply_to_job("alice", "Java", "Acme", "desc"),
    );
    println!(
        "  alice has {} application(s)",
        agency.number_of_user_applications("alice")
    );

    println!("\nComment ordering");
    agency.register("bob")?;
    agency.apply_to_job("bob", "Java", "Acme", "")?;
    clock.advance_days(1);
    report(
        "bob comments 'looks good' the next day",
        agency.comment_application("bob", "Java", "Acme", "looks good"),
    );
    clock.set(today);
    report(
        "bob comments 'follow up' back on the application day",
        agency.comment_application("bob", "Java", "Acme", "follow up"),
    );

    println!("\nApplications on file");
    for username in ["alice", "bob"] {
        for application in agency.applications_of(username)? {
            println!(
                "  {username}: {} at {} (applied {}, {} comment(s))",
                application.position(),
                application.company(),
                application.applied_on(),
                application.number_of_comments()
            );
            for (date, comments) in application.comments() {
                let age = date.signed_duration_since(application.applied_on());
                println!(
                    "    {date} (+{}d): {}",
                    age.num_days(),
                    comments.join(" | ")
                );
            }
        }
    }

    Ok(())
}

fn report(action: &str, outcome: Result<(), AgencyError>) {
    match outcome {
        Ok(()) => println!("  {action}: accepted"),
        Err(err) => println!("  {action}: rejected ({:?}: {err})", err.kind()),
    }
}
