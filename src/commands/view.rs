use crate::cli::{Cli, Commands, Page};
use crate::domain::models::{JsonOut, NavItem, UiState};
use crate::profile::{self, Profile};
use crate::services::output::{print_one, print_out};

pub fn handle_view_commands(
    cli: &Cli,
    profile: &Profile,
    state: &UiState,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Show { section } => {
            let page = (*section).unwrap_or(state.page);
            show_section(cli.json, profile, page)?;
        }
        Commands::Pages => {
            let items: Vec<NavItem> = Page::ALL
                .iter()
                .map(|p| NavItem {
                    id: p.id(),
                    label: p.label(),
                })
                .collect();
            print_out(cli.json, &items, |i| format!("{}\t{}", i.id, i.label))?;
        }
        Commands::Status => {
            print_one(cli.json, state, |s| {
                format!(
                    "page={} sidebar={} collapsed={} theme={:?}",
                    s.page.id(),
                    if s.sidebar_open { "open" } else { "closed" },
                    s.sidebar_collapsed,
                    s.theme
                )
                .to_lowercase()
            })?;
        }
        Commands::Validate => {
            profile::validate(profile)?;
            print_one(cli.json, "valid", |_| "profile valid".to_string())?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn show_section(json: bool, profile: &Profile, page: Page) -> anyhow::Result<()> {
    match page {
        Page::Home => {
            if json {
                let data = serde_json::json!({
                    "name": profile.name,
                    "short_name": profile.short_name,
                    "role": profile.role,
                    "headline": profile.headline,
                    "badges": [profile.location, profile.availability, profile.experience_badge],
                    "cv_url": profile.cv_url,
                });
                print_envelope(&data)?;
            } else {
                println!("{}", profile.name);
                println!("{}", profile.headline);
                println!(
                    "{} | {} | {}",
                    profile.location, profile.availability, profile.experience_badge
                );
                println!("{} ({})", profile.short_name, profile.role);
                println!("CV: {}", profile.cv_url);
            }
        }
        Page::About => {
            if json {
                let data = serde_json::json!({
                    "summary": profile.summary,
                    "expertise": profile.expertise,
                    "stats": profile.stats,
                    "achievements": profile.achievements,
                });
                print_envelope(&data)?;
            } else {
                for paragraph in &profile.summary {
                    println!("{}", paragraph);
                    println!();
                }
                println!("expertise: {}", profile.expertise.join(", "));
                for stat in &profile.stats {
                    println!("{}\t{}", stat.value, stat.label);
                }
                for item in &profile.achievements {
                    println!("- {}", item);
                }
            }
        }
        Page::Experience => {
            if json {
                print_envelope(&profile.experiences)?;
            } else {
                for exp in &profile.experiences {
                    println!("{} @ {} ({})", exp.title, exp.company, exp.kind);
                    println!("{} | {}", exp.period, exp.location);
                    println!("{}", exp.description);
                    println!("tech: {}", exp.technologies.join(", "));
                    println!();
                }
            }
        }
        Page::Education => {
            if json {
                let data = serde_json::json!({
                    "education": profile.education,
                    "certifications": profile.certifications,
                });
                print_envelope(&data)?;
            } else {
                for edu in &profile.education {
                    println!("{} in {}", edu.degree, edu.field);
                    println!("{} ({})", edu.institution, edu.period);
                    println!("CGPA: {}", edu.cgpa);
                    println!("subjects: {}", edu.subjects.join(", "));
                    println!();
                }
                for cert in &profile.certifications {
                    print!("{}\t{}\t{}", cert.title, cert.provider, cert.description);
                    match &cert.link {
                        Some(link) => println!("\t{}", link),
                        None => println!(),
                    }
                }
            }
        }
        Page::Skills => {
            if json {
                print_envelope(&profile.skills)?;
            } else {
                for group in &profile.skills {
                    println!("{}", group.category);
                    for skill in &group.skills {
                        println!("  {}\t{}%", skill.name, skill.level);
                    }
                }
            }
        }
        Page::Projects => {
            if json {
                print_envelope(&profile.projects)?;
            } else {
                for project in &profile.projects {
                    println!("{} [{}]", project.title, project.category);
                    println!("{}", project.description);
                    println!("tech: {}", project.technologies.join(", "));
                    println!("code: {}", project.github);
                    println!();
                }
            }
        }
        Page::Contact => {
            if json {
                let data = serde_json::json!({
                    "email": profile.email,
                    "whatsapp": profile.whatsapp,
                    "location": profile.location,
                    "links": profile.links,
                });
                print_envelope(&data)?;
            } else {
                println!("email: {}", profile.email);
                println!("whatsapp: {}", profile.whatsapp);
                println!("location: {}", profile.location);
                for link in &profile.links {
                    println!("{}\t{}", link.label, link.url);
                }
                println!();
                println!("use `folio contact format` to prepare a message");
            }
        }
    }
    Ok(())
}

fn print_envelope<T: serde::Serialize>(data: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}
