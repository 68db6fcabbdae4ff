use crate::tests::{all_workspaces, create_member, create_project};
use crate::{NewProjectInput, NewTaskInput, NewTeamMemberInput, TeamMemberChanges, WorkspaceError};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_blank_member_input_when_created_then_defaults_apply() {
    for workspace in all_workspaces().await {
        let member = workspace
            .create_team_member(NewTeamMemberInput::default())
            .await
            .unwrap();

        assert_that!(member.name, eq("Unnamed"));
        assert_that!(member.role, eq(""));
        assert_that!(member.capacity, eq(4));
    }
}

#[tokio::test]
async fn given_capacity_below_one_when_created_then_validation_and_nothing_stored() {
    for workspace in all_workspaces().await {
        for capacity in [0, -3] {
            let result = workspace
                .create_team_member(NewTeamMemberInput {
                    name: Some("Zero".to_string()),
                    role: None,
                    capacity: Some(capacity),
                })
                .await;

            match result {
                Err(WorkspaceError::Validation { field, .. }) => {
                    assert_that!(field.as_deref(), some(eq("capacity")));
                }
                other => panic!("Expected Validation error, got {:?}", other),
            }
        }

        assert_that!(workspace.list_team_members().await.unwrap(), is_empty());
    }
}

#[tokio::test]
async fn given_assigned_tasks_when_listing_members_then_counts_derived() {
    for workspace in all_workspaces().await {
        // Given: Ava with two tasks, Ethan with none
        let project = create_project(&workspace, "P").await;
        let ava = create_member(&workspace, "Ava Martin").await;
        create_member(&workspace, "Ethan Ward").await;
        for name in ["A", "B"] {
            workspace
                .create_task(NewTaskInput {
                    project_id: Some(project.id.to_string()),
                    name: Some(name.to_string()),
                    assignee_id: Some(ava.id.to_string()),
                })
                .await
                .unwrap();
        }

        // When
        let members = workspace.list_team_members().await.unwrap();

        // Then: Alphabetical, with counts
        assert_that!(members.len(), eq(2));
        assert_that!(members[0].member.name, eq("Ava Martin"));
        assert_that!(members[0].assigned_count, eq(2));
        assert_that!(members[1].member.name, eq("Ethan Ward"));
        assert_that!(members[1].assigned_count, eq(0));
    }
}

#[tokio::test]
async fn given_member_when_capacity_lowered_below_load_then_over_capacity() {
    for workspace in all_workspaces().await {
        let project = create_project(&workspace, "P").await;
        let member = create_member(&workspace, "Jules").await;
        for name in ["A", "B", "C"] {
            workspace
                .create_task(NewTaskInput {
                    project_id: Some(project.id.to_string()),
                    name: Some(name.to_string()),
                    assignee_id: Some(member.id.to_string()),
                })
                .await
                .unwrap();
        }

        let view = workspace
            .update_team_member(
                &member.id.to_string(),
                TeamMemberChanges {
                    capacity: Some(2),
                    role: Some(" Permitting ".to_string()),
                    ..TeamMemberChanges::default()
                },
            )
            .await
            .unwrap();

        assert_that!(view.member.capacity, eq(2));
        assert_that!(view.member.role, eq("Permitting"));
        assert_that!(view.assigned_count, eq(3));
        assert!(view.is_over_capacity());
    }
}

#[tokio::test]
async fn given_invalid_capacity_when_updating_then_validation() {
    for workspace in all_workspaces().await {
        let member = create_member(&workspace, "Jules").await;

        let result = workspace
            .update_team_member(
                &member.id.to_string(),
                TeamMemberChanges {
                    capacity: Some(0),
                    ..TeamMemberChanges::default()
                },
            )
            .await;

        assert!(matches!(result, Err(WorkspaceError::Validation { .. })));
    }
}

#[tokio::test]
async fn given_referenced_member_when_deleted_then_references_dangle() {
    for workspace in all_workspaces().await {
        // Given: A member on a project team and assigned a task
        let member = create_member(&workspace, "Sloane").await;
        let project = workspace
            .create_project(NewProjectInput {
                team: Some(vec![member.id.to_string()]),
                ..NewProjectInput::default()
            })
            .await
            .unwrap();
        let task = workspace
            .create_task(NewTaskInput {
                project_id: Some(project.id.to_string()),
                name: None,
                assignee_id: Some(member.id.to_string()),
            })
            .await
            .unwrap()
            .task;

        // When
        let deleted = workspace
            .delete_team_member(&member.id.to_string())
            .await
            .unwrap();

        // Then: Reads still work and keep the stale ids
        assert_that!(deleted, eq(member.id));
        let snapshot = workspace.snapshot().await.unwrap();
        assert_that!(snapshot.team_members, is_empty());
        assert_that!(snapshot.projects[0].team, eq(&vec![member.id]));
        assert_that!(snapshot.tasks[0].id, eq(task.id));
        assert_that!(snapshot.tasks[0].assignee_id, some(eq(member.id)));
    }
}

#[tokio::test]
async fn given_missing_member_when_updated_or_deleted_then_not_found() {
    for workspace in all_workspaces().await {
        let id = Uuid::new_v4().to_string();

        let updated = workspace
            .update_team_member(&id, TeamMemberChanges::default())
            .await;
        let deleted = workspace.delete_team_member("not-a-uuid").await;

        assert!(matches!(updated, Err(WorkspaceError::NotFound { .. })));
        assert!(matches!(deleted, Err(WorkspaceError::NotFound { .. })));
    }
}
