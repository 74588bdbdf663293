//! End-to-end tests of `SetupService` through the in-memory adapters.

use std::path::{Path, PathBuf};

use pipeforge_adapters::{MemoryFilesystem, MemoryTemplateSource};
use pipeforge_core::{
    application::SetupService,
    domain::{AppType, PipelineDefaults, SetupRequest},
};

fn defaults() -> PipelineDefaults {
    PipelineDefaults {
        aws_region: "us-east-1".into(),
        instance_type: "t3.micro".into(),
        min_instances: 1,
        max_instances: 3,
        enable_database: false,
        database_type: "none".into(),
        database_instance_class: "none".into(),
    }
}

fn service_with(templates: MemoryTemplateSource, filesystem: MemoryFilesystem) -> SetupService {
    SetupService::new(Box::new(templates), Box::new(filesystem))
}

#[test]
fn devops_dir_holds_union_of_app_and_common_trees() {
    let templates = MemoryTemplateSource::new()
        .with_file("node-backend", "terraform/main.tf", "resource {}\n")
        .with_file("node-backend", "docker/Dockerfile", "FROM node:20\n")
        .with_file("common", "ansible/deploy.yml", "- hosts: all\n")
        .with_workflow("backend-deploy.yml", "jobs: {}\n");
    let filesystem = MemoryFilesystem::new();
    let service = service_with(templates, filesystem.clone());

    let request = SetupRequest::new("/proj", AppType::NodeBackend, "svc");
    let report = service.setup(&request, &defaults()).unwrap();

    assert_eq!(report.copied_files, 3);
    assert!(filesystem.read_file(Path::new("/proj/devops/terraform/main.tf")).is_some());
    assert!(filesystem.read_file(Path::new("/proj/devops/docker/Dockerfile")).is_some());
    assert!(filesystem.read_file(Path::new("/proj/devops/ansible/deploy.yml")).is_some());

    // 3 copied + tfvars + inventory + workflow
    assert_eq!(filesystem.list_files().len(), 6);
}

#[test]
fn common_tree_wins_on_collision() {
    // The app-type tree is copied first; common is merged over it.
    let templates = MemoryTemplateSource::new()
        .with_file("react-frontend", "README.md", "app-specific\n")
        .with_file("common", "README.md", "shared\n")
        .with_workflow("frontend-deploy.yml", "jobs: {}\n");
    let filesystem = MemoryFilesystem::new();
    let service = service_with(templates, filesystem.clone());

    let request = SetupRequest::new("/proj", AppType::ReactFrontend, "web");
    service.setup(&request, &defaults()).unwrap();

    assert_eq!(
        filesystem.read_file(Path::new("/proj/devops/README.md")).unwrap(),
        "shared\n"
    );
}

#[test]
fn generated_config_dirs_do_not_depend_on_template_trees() {
    // No template trees at all: terraform/ and ansible/ are still created
    // for the generated files.
    let templates =
        MemoryTemplateSource::new().with_workflow("frontend-deploy.yml", "jobs: {}\n");
    let filesystem = MemoryFilesystem::new();
    let service = service_with(templates, filesystem.clone());

    let request = SetupRequest::new("/proj", AppType::ReactFrontend, "web");
    let report = service.setup(&request, &defaults()).unwrap();

    assert_eq!(report.copied_files, 0);
    assert!(filesystem
        .read_file(Path::new("/proj/devops/terraform/terraform.tfvars"))
        .is_some());
    assert!(filesystem
        .read_file(Path::new("/proj/devops/ansible/inventory.template"))
        .is_some());
}

#[test]
fn tfvars_and_inventory_carry_project_identity() {
    let templates =
        MemoryTemplateSource::new().with_workflow("backend-deploy.yml", "jobs: {}\n");
    let filesystem = MemoryFilesystem::new();
    let service = service_with(templates, filesystem.clone());

    let request = SetupRequest::new("/proj", AppType::JavaSpringBoot, "orders");
    service.setup(&request, &defaults()).unwrap();

    let tfvars = filesystem
        .read_file(Path::new("/proj/devops/terraform/terraform.tfvars"))
        .unwrap();
    assert!(tfvars.contains("project_name = \"orders\""));
    assert!(tfvars.contains("app_type = \"java-spring-boot\""));
    assert!(tfvars.contains("aws_region = \"us-east-1\""));

    let inventory = filesystem
        .read_file(Path::new("/proj/devops/ansible/inventory.template"))
        .unwrap();
    assert!(inventory.contains("[staging]"));
    assert!(inventory.contains("[production]"));
    assert!(inventory.contains("project_name=orders"));
    assert!(inventory.contains("app_type=java-spring-boot"));
}

#[test]
fn workflow_is_rendered_from_the_backend_template_for_node() {
    let templates = MemoryTemplateSource::new()
        .with_workflow(
            "backend-deploy.yml",
            "name: Deploy {{PROJECT_NAME}}\nenv:\n  APP: {{APP_TYPE}}\n",
        )
        .with_workflow("frontend-deploy.yml", "name: wrong template\n");
    let filesystem = MemoryFilesystem::new();
    let service = service_with(templates, filesystem.clone());

    let request = SetupRequest::new("/proj", AppType::NodeBackend, "api");
    let report = service.setup(&request, &defaults()).unwrap();

    assert_eq!(
        report.workflow_path,
        PathBuf::from("/proj/.github/workflows/deploy.yml")
    );
    let workflow = filesystem.read_file(&report.workflow_path).unwrap();
    assert_eq!(workflow, "name: Deploy api\nenv:\n  APP: node-backend\n");
}

#[test]
fn worked_example_react_frontend_demo() {
    // The canonical example: react-frontend "Demo" into /tmp/demo.
    let templates = MemoryTemplateSource::new()
        .with_file("react-frontend", "terraform/main.tf", "resource {}\n")
        .with_workflow(
            "frontend-deploy.yml",
            "name: {{PROJECT_NAME}} ({{APP_TYPE}})\non: push\n",
        );
    let filesystem = MemoryFilesystem::new();
    let service = service_with(templates, filesystem.clone());

    let request = SetupRequest::new("/tmp/demo", AppType::ReactFrontend, "Demo");
    service.setup(&request, &defaults()).unwrap();

    let tfvars = filesystem
        .read_file(Path::new("/tmp/demo/devops/terraform/terraform.tfvars"))
        .unwrap();
    assert!(tfvars.contains("project_name = \"Demo\""));
    assert!(tfvars.contains("enable_database = false"));

    let workflow = filesystem
        .read_file(Path::new("/tmp/demo/.github/workflows/deploy.yml"))
        .unwrap();
    assert_eq!(workflow, "name: Demo (react-frontend)\non: push\n");
}

#[test]
fn failure_leaves_already_written_files_in_place() {
    // No workflow template registered: the run fails at the last step, and
    // the files generated before the failure stay on disk.
    let templates =
        MemoryTemplateSource::new().with_file("node-backend", "README.md", "svc\n");
    let filesystem = MemoryFilesystem::new();
    let service = service_with(templates, filesystem.clone());

    let request = SetupRequest::new("/proj", AppType::NodeBackend, "svc");
    assert!(service.setup(&request, &defaults()).is_err());

    assert!(filesystem.read_file(Path::new("/proj/devops/README.md")).is_some());
    assert!(filesystem
        .read_file(Path::new("/proj/devops/terraform/terraform.tfvars"))
        .is_some());
    assert!(filesystem
        .read_file(Path::new("/proj/.github/workflows/deploy.yml"))
        .is_none());
}
