use crate::infra::{load_assessment_service, parse_date, parse_locale, read_answers};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use transition_compass::assessment::report::views::RecommendationView;
use transition_compass::assessment::{
    AnswerMap, AssessmentResult, AssessmentSubmission, Domain, Locale, QuestionSet, RoleId,
};
use transition_compass::config::AppConfig;
use transition_compass::error::AppError;

/// Option index picked for each question in the canned demo session, cycled.
const DEMO_PICKS: [usize; 7] = [3, 1, 2, 0, 3, 2, 1];

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Role whose tailored questions are included
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Output language (en or es)
    #[arg(long, value_parser = parse_locale, default_value = "en")]
    pub(crate) locale: Locale,
    /// Assessment variant (essentials or transition). Defaults to COMPASS_VARIANT.
    #[arg(long)]
    pub(crate) variant: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping question ids to chosen option ids
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Role the answers were collected for
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Output language (en or es)
    #[arg(long, value_parser = parse_locale, default_value = "en")]
    pub(crate) locale: Locale,
    /// Assessment variant (essentials or transition). Defaults to COMPASS_VARIANT.
    #[arg(long)]
    pub(crate) variant: Option<String>,
    /// Print the result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Output language (en or es)
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Role for the canned session. Defaults to executive.
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Assessment variant (essentials or transition). Defaults to COMPASS_VARIANT.
    #[arg(long)]
    pub(crate) variant: Option<String>,
    /// Date printed on the report (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let QuestionsArgs {
        role,
        locale,
        variant,
    } = args;

    let config = AppConfig::load()?;
    let service = load_assessment_service(&config.assessment)?;
    let set = service.questions(&RoleId::or_general(role), locale, variant.as_deref())?;
    render_question_set(&set);
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        role,
        locale,
        variant,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = load_assessment_service(&config.assessment)?;
    let submission = AssessmentSubmission {
        role_id: RoleId::or_general(role),
        answers: read_answers(&answers)?,
        locale,
        variant,
    };
    let result = service.assess(&submission)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        locale,
        role,
        variant,
        today,
    } = args;

    let config = AppConfig::load()?;
    let service = load_assessment_service(&config.assessment)?;
    let locale = locale.unwrap_or_default();
    let role = RoleId::or_general(role.or_else(|| Some("executive".to_string())));
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let set = service.questions(&role, locale, variant.as_deref())?;
    let submission = AssessmentSubmission {
        role_id: role,
        answers: demo_answers(&set),
        locale,
        variant,
    };
    let result = service.assess(&submission)?;

    println!("Transition Compass demo ({today})");
    println!(
        "- {} questions composed for role '{}', {} answered",
        result.question_count, result.role, result.answered_count
    );
    render_result(&result);
    Ok(())
}

fn demo_answers(set: &QuestionSet) -> AnswerMap {
    set.questions
        .iter()
        .enumerate()
        .filter_map(|(index, question)| {
            let pick = DEMO_PICKS[index % DEMO_PICKS.len()];
            let option = question
                .options
                .get(pick)
                .or_else(|| question.options.last())?;
            Some((question.id.clone(), option.id.clone()))
        })
        .collect()
}

fn render_question_set(set: &QuestionSet) {
    println!(
        "{} question set for role '{}' ({} questions)",
        set.variant,
        set.role,
        set.questions.len()
    );
    for question in &set.questions {
        println!("\n[{}] {} ({})", question.domain_label, question.prompt, question.id);
        for option in &question.options {
            println!("  - {}: {}", option.id, option.label);
        }
    }
}

fn render_result(result: &AssessmentResult) {
    println!(
        "\nOverall score: {}% ({} variant, locale {})",
        result.overall_score,
        result.variant,
        result.locale.code()
    );

    println!("Domain scores:");
    for score in result.domain_scores.values() {
        println!(
            "  - {}: {}/{} ({}%) {}",
            score.label, score.score, score.max, score.percentage, score.level_label
        );
    }

    let label = |domain: Domain| {
        result
            .domain_scores
            .get(&domain)
            .map(|score| score.label)
            .unwrap_or_default()
    };
    println!("Top strength: {}", label(result.top_strength));
    println!("Top growth area: {}", label(result.top_growth_area));

    if let Some(archetype) = &result.archetype {
        println!(
            "\nSituation: {} ({} votes)\n  {}",
            archetype.name, archetype.votes, archetype.description
        );
    }

    if result.failure_factors.is_empty() {
        println!("\nFailure patterns: none detected");
    } else {
        println!("\nFailure patterns:");
        for factor in &result.failure_factors {
            println!(
                "  {} {} ({} signals): {}",
                factor.icon, factor.name, factor.matched, factor.message
            );
        }
    }

    render_lines("Strengths", &result.insights.strengths);
    render_lines("Growth areas", &result.insights.growth_areas);
    render_lines("Next steps", &result.insights.next_steps);
    render_recommendations("Recommended actions", &result.recommended_actions);
    render_recommendations("Techniques", &result.techniques);
}

fn render_lines(heading: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for line in lines {
        println!("  - {line}");
    }
}

fn render_recommendations(heading: &str, entries: &[RecommendationView]) {
    if entries.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for entry in entries {
        println!("  - {}: {}", entry.title, entry.detail);
    }
}
