pub mod aggregate_handler;
pub mod project_handler;

pub use aggregate_handler::{
    __path_get_project_aggregate, __path_list_project_aggregates, get_project_aggregate,
    list_project_aggregates,
};
pub use project_handler::{
    __path_create_project, __path_get_filter_options, __path_get_project,
    __path_list_featured_projects, __path_list_my_projects, __path_list_projects, create_project,
    get_filter_options, get_project, list_featured_projects, list_my_projects, list_projects,
};
