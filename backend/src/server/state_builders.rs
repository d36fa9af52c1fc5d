//! Builders wiring repositories and the blob store into HTTP handler state.

use std::sync::Arc;

use actix_web::web;

use backend::domain::ports::{BlobStore, BlogRepository, DepartmentRepository, MemberRepository};
use backend::domain::{BlogService, DepartmentService, MemberService, PhotoLifecycle};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::persistence::{
    DieselBlogRepository, DieselDepartmentRepository, DieselMemberRepository,
};

use super::ServerConfig;

/// Cast each service into the command and query ports handlers depend on.
fn build_ports<D, M, Bl, B>(
    departments: Arc<D>,
    members: Arc<M>,
    blogs: Arc<Bl>,
    photos: PhotoLifecycle<B>,
) -> HttpStatePorts
where
    D: DepartmentRepository + 'static,
    M: MemberRepository + 'static,
    Bl: BlogRepository + 'static,
    B: BlobStore + 'static,
{
    let department_service = Arc::new(DepartmentService::new(departments));
    let member_service = Arc::new(MemberService::new(members, photos.clone()));
    let blog_service = Arc::new(BlogService::new(blogs, photos));

    HttpStatePorts {
        departments: department_service.clone(),
        departments_query: department_service,
        members: member_service.clone(),
        members_query: member_service,
        blogs: blog_service.clone(),
        blogs_query: blog_service,
    }
}

/// Build the shared handler state from the Diesel repositories and the
/// configured blob store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let pool = &config.db_pool;
    let photos = PhotoLifecycle::new(config.blob_store.clone(), config.placeholder.clone());

    web::Data::new(HttpState::new(build_ports(
        Arc::new(DieselDepartmentRepository::new(pool.clone())),
        Arc::new(DieselMemberRepository::new(pool.clone())),
        Arc::new(DieselBlogRepository::new(pool.clone())),
        photos,
    )))
}
