//! Team roster renderer.

use crate::ui::helpers::{attr, escape, safe_href};
use crate::ui::viewmodel::{MemberView, TeamView};

/// Renders the `<section id="team">` roster.
pub fn render_team(team: &TeamView) -> String {
    let members: String = team.members.iter().map(render_member).collect();

    format!(
        "<section id=\"team\" class=\"team\">\
         <h2>{}</h2>\
         <ul class=\"team-grid\">{members}</ul>\
         </section>",
        escape(&team.heading),
    )
}

fn render_member(member: &MemberView) -> String {
    let avatar = member.avatar.as_ref().map_or_else(
        || format!("<span class=\"avatar avatar-initials\" aria-hidden=\"true\">{}</span>", escape(&member.initials)),
        |src| {
            format!(
                "<img class=\"avatar\"{}{} loading=\"lazy\">",
                attr("src", safe_href(src)),
                attr("alt", &member.name)
            )
        },
    );

    let name = member.profile_url.as_ref().map_or_else(
        || escape(&member.name),
        |url| {
            format!(
                "<a{} rel=\"noopener\" target=\"_blank\">{}</a>",
                attr("href", safe_href(url)),
                escape(&member.name)
            )
        },
    );

    format!(
        "<li class=\"member\">{avatar}<h3>{name}</h3><p class=\"role\">{}</p></li>",
        escape(&member.role)
    )
}
