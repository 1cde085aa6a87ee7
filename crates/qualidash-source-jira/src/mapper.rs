//! Maps Jira wire sprints to the shared pass-through type

use qualidash_source_api::Sprint;

use crate::types::JiraSprint;

pub(crate) fn map_sprint(sprint: JiraSprint) -> Sprint {
    Sprint {
        id: sprint.id,
        name: sprint.name,
        state: sprint.state,
        start_date: sprint.start_date,
        end_date: sprint.end_date,
        goal: sprint.goal,
    }
}
