//! End-to-end HTTP tests over the real services with in-memory adapters.
//!
//! Repositories keep rows in a mutex-guarded map and the blob store records
//! every call, so the photo lifecycle can be observed through the API.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, test, web};
use async_trait::async_trait;
use pagination::Page;
use serde_json::{Value, json};

use backend::Trace;
use backend::domain::ports::{
    BlobStore, BlobStoreError, BlogRepository, BlogRepositoryError, DepartmentRepository,
    DepartmentRepositoryError, MemberRepository, MemberRepositoryError,
};
use backend::domain::{
    BlobObject, Blog, BlogId, BlogService, BlogUpdate, Department, DepartmentId,
    DepartmentService, DepartmentUpdate, Member, MemberFilter, MemberId, MemberService,
    MemberUpdate, NewBlog, NewDepartment, NewMember, PLACEHOLDER_PHOTO_URL, PhotoLifecycle,
    PhotoUri, TRACE_ID_HEADER,
};
use backend::inbound::http::configure_api;
use backend::inbound::http::root::welcome;
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::inbound::http::validation::{json_config, path_config, query_config};

const BOUNDARY: &str = "surface-boundary";
const BLOB_BASE: &str = "https://blob.test";

#[derive(Default)]
struct Tables {
    departments: BTreeMap<i32, String>,
    members: BTreeMap<i32, (Member, Vec<i32>)>,
    blogs: BTreeMap<i32, Blog>,
    next_id: i32,
}

impl Tables {
    fn next(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn resolve(&self, ids: &[DepartmentId]) -> Vec<Department> {
        ids.iter()
            .filter_map(|id| {
                self.departments.get(&id.get()).map(|name| Department {
                    id: *id,
                    name: name.clone(),
                })
            })
            .collect()
    }

    fn hydrate(&self, member: &Member, department_ids: &[i32]) -> Member {
        let ids: Vec<DepartmentId> = department_ids.iter().copied().map(DepartmentId::new).collect();
        Member {
            departments: self.resolve(&ids),
            ..member.clone()
        }
    }
}

/// One in-memory store backing all three repository ports.
#[derive(Default)]
struct InMemoryClub {
    tables: Mutex<Tables>,
}

impl InMemoryClub {
    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|err| err.into_inner())
    }
}

fn page_of<T: Clone>(rows: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    rows.skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

#[async_trait]
impl DepartmentRepository for InMemoryClub {
    async fn insert(
        &self,
        department: &NewDepartment,
    ) -> Result<Department, DepartmentRepositoryError> {
        let mut tables = self.lock();
        if tables.departments.values().any(|n| n == department.name()) {
            return Err(DepartmentRepositoryError::duplicate_name(department.name()));
        }
        let id = tables.next();
        tables.departments.insert(id, department.name().to_owned());
        Ok(Department {
            id: DepartmentId::new(id),
            name: department.name().to_owned(),
        })
    }

    async fn list(&self, page: Page) -> Result<Vec<Department>, DepartmentRepositoryError> {
        let tables = self.lock();
        let rows = tables.departments.iter().map(|(id, name)| Department {
            id: DepartmentId::new(*id),
            name: name.clone(),
        });
        Ok(page_of(rows, page))
    }

    async fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DepartmentRepositoryError> {
        Ok(self.lock().resolve(&[id]).pop())
    }

    async fn update(
        &self,
        id: DepartmentId,
        update: &DepartmentUpdate,
    ) -> Result<Option<Department>, DepartmentRepositoryError> {
        let mut tables = self.lock();
        let Some(name) = tables.departments.get_mut(&id.get()) else {
            return Ok(None);
        };
        update.name().clone_into(name);
        Ok(tables.resolve(&[id]).pop())
    }

    async fn delete(&self, id: DepartmentId) -> Result<bool, DepartmentRepositoryError> {
        Ok(self.lock().departments.remove(&id.get()).is_some())
    }
}

#[async_trait]
impl MemberRepository for InMemoryClub {
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberRepositoryError> {
        let mut tables = self.lock();
        let id = tables.next();
        let stored = Member {
            id: MemberId::new(id),
            name: member.draft.name().to_owned(),
            role: member.draft.role().to_owned(),
            photo_uri: member.photo_uri.clone(),
            active_member: member.draft.active_member(),
            departments: Vec::new(),
        };
        let ids: Vec<i32> = tables
            .resolve(member.draft.department_ids())
            .iter()
            .map(|d| d.id.get())
            .collect();
        let hydrated = tables.hydrate(&stored, &ids);
        tables.members.insert(id, (stored, ids));
        Ok(hydrated)
    }

    async fn list(
        &self,
        page: Page,
        filter: &MemberFilter,
    ) -> Result<Vec<Member>, MemberRepositoryError> {
        let tables = self.lock();
        let rows = tables
            .members
            .values()
            .filter(|(member, _)| filter.role().is_none_or(|role| member.role == role))
            .map(|(member, ids)| tables.hydrate(member, ids));
        Ok(page_of(rows, page))
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, MemberRepositoryError> {
        let tables = self.lock();
        Ok(tables
            .members
            .get(&id.get())
            .map(|(member, ids)| tables.hydrate(member, ids)))
    }

    async fn update(
        &self,
        id: MemberId,
        update: &MemberUpdate,
    ) -> Result<Option<Member>, MemberRepositoryError> {
        let mut tables = self.lock();
        if !tables.members.contains_key(&id.get()) {
            return Ok(None);
        }
        let stored = Member {
            id,
            name: update.name.clone(),
            role: update.role.clone(),
            photo_uri: update.photo_uri.clone(),
            active_member: update.active_member,
            departments: Vec::new(),
        };
        let ids: Vec<i32> = tables
            .resolve(&update.department_ids)
            .iter()
            .map(|d| d.id.get())
            .collect();
        let hydrated = tables.hydrate(&stored, &ids);
        tables.members.insert(id.get(), (stored, ids));
        Ok(Some(hydrated))
    }

    async fn delete(&self, id: MemberId) -> Result<bool, MemberRepositoryError> {
        Ok(self.lock().members.remove(&id.get()).is_some())
    }
}

#[async_trait]
impl BlogRepository for InMemoryClub {
    async fn insert(&self, blog: &NewBlog) -> Result<Blog, BlogRepositoryError> {
        let mut tables = self.lock();
        let id = tables.next();
        let stored = Blog {
            id: BlogId::new(id),
            title: blog.draft.title().to_owned(),
            author: blog.draft.author().to_owned(),
            cover_image_uri: blog.cover_image_uri.clone(),
            body: blog.draft.body().to_owned(),
        };
        tables.blogs.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list(&self, page: Page) -> Result<Vec<Blog>, BlogRepositoryError> {
        Ok(page_of(self.lock().blogs.values().cloned(), page))
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        Ok(self.lock().blogs.get(&id.get()).cloned())
    }

    async fn update(
        &self,
        id: BlogId,
        update: &BlogUpdate,
    ) -> Result<Option<Blog>, BlogRepositoryError> {
        let mut tables = self.lock();
        Ok(tables.blogs.get_mut(&id.get()).map(|blog| {
            blog.title.clone_from(&update.title);
            blog.author.clone_from(&update.author);
            blog.body.clone_from(&update.body);
            blog.clone()
        }))
    }

    async fn set_cover(
        &self,
        id: BlogId,
        cover_image_uri: &PhotoUri,
    ) -> Result<Option<Blog>, BlogRepositoryError> {
        let mut tables = self.lock();
        Ok(tables.blogs.get_mut(&id.get()).map(|blog| {
            blog.cover_image_uri = cover_image_uri.clone();
            blog.clone()
        }))
    }

    async fn delete(&self, id: BlogId) -> Result<bool, BlogRepositoryError> {
        Ok(self.lock().blogs.remove(&id.get()).is_some())
    }
}

/// Blob store double recording uploaded paths and deleted URLs.
///
/// Each upload is served from a distinct URL.
#[derive(Default)]
struct RecordingBlobStore {
    uploads: Mutex<Vec<String>>,
    deletes: Mutex<Vec<String>>,
}

impl RecordingBlobStore {
    fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl BlobStore for RecordingBlobStore {
    async fn put(&self, object: BlobObject) -> Result<PhotoUri, BlobStoreError> {
        let mut uploads = self.uploads.lock().unwrap_or_else(|e| e.into_inner());
        let url = format!("{BLOB_BASE}/{}?v={}", object.path, uploads.len() + 1);
        uploads.push(object.path);
        Ok(PhotoUri::new(url))
    }

    async fn delete(&self, urls: &[PhotoUri]) -> Result<(), BlobStoreError> {
        self.deletes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend(urls.iter().map(|u| u.as_str().to_owned()));
        Ok(())
    }
}

fn state(club: Arc<InMemoryClub>, blobs: Arc<RecordingBlobStore>) -> HttpState {
    let photos = PhotoLifecycle::new(blobs, PhotoUri::placeholder());
    let departments = Arc::new(DepartmentService::new(club.clone()));
    let members = Arc::new(MemberService::new(club.clone(), photos.clone()));
    let blogs = Arc::new(BlogService::new(club, photos));
    HttpState::new(HttpStatePorts {
        departments: departments.clone(),
        departments_query: departments,
        members: members.clone(),
        members_query: members,
        blogs: blogs.clone(),
        blogs_query: blogs,
    })
}

fn app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(welcome)
        .service(web::scope("/api").configure(configure_api))
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart(parts: &[Part<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        match part {
            Part::Text(name, value) => body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            ),
            Part::File(name, file_name, content) => {
                body.extend_from_slice(
                    format!(
                        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

fn form_request(method: &str, uri: &str, parts: &[Part<'_>]) -> actix_http::Request {
    let (content_type, body) = multipart(parts);
    let request = match method {
        "PUT" => test::TestRequest::put(),
        _ => test::TestRequest::post(),
    };
    request
        .uri(uri)
        .insert_header((CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request()
}

#[actix_web::test]
async fn welcome_route_greets_clients() {
    let app = test::init_service(app(state(Default::default(), Default::default()))).await;

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body, json!({"message": "Welcome to the Wics API"}));
}

#[actix_web::test]
async fn department_lifecycle_and_conflicts() {
    let app = test::init_service(app(state(Default::default(), Default::default()))).await;

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/departments")
            .set_json(json!({"name": "Events"}))
            .to_request(),
    )
    .await;
    assert_eq!(created, json!({"id": 1, "name": "Events"}));

    let duplicate = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/departments")
            .set_json(json!({"name": "Events"}))
            .to_request(),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let deleted: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::delete().uri("/api/departments/1").to_request(),
    )
    .await;
    assert_eq!(
        deleted,
        json!({"message": "Department deleted successfully"})
    );

    let missing = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/departments/1").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let trace_id = missing
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(missing).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["traceId"], trace_id.as_str());
}

#[actix_web::test]
async fn member_photo_is_replaced_and_released() {
    let club = Arc::new(InMemoryClub::default());
    let blobs = Arc::new(RecordingBlobStore::default());
    let app = test::init_service(app(state(club, blobs.clone()))).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/departments")
            .set_json(json!({"name": "Events"}))
            .to_request(),
    )
    .await;

    let created: Value = test::call_and_read_body_json(
        &app,
        form_request(
            "POST",
            "/api/members",
            &[
                Part::Text("name", "Ada"),
                Part::Text("role", "Chair"),
                Part::Text("department_ids", "1"),
                Part::Text("department_ids", "999"),
                Part::File("photo", "ada.png", b"first"),
            ],
        ),
    )
    .await;
    let first_photo = created["photo_uri"].as_str().expect("photo uri").to_owned();
    assert!(first_photo.starts_with("https://blob.test/uploaded_images/"));
    assert_eq!(created["departments"], json!([{"id": 1, "name": "Events"}]));
    assert_eq!(created["active_member"], true);

    let member_id = created["id"].as_i64().expect("member id");
    let updated: Value = test::call_and_read_body_json(
        &app,
        form_request(
            "PUT",
            &format!("/api/members/{member_id}"),
            &[
                Part::Text("name", "Ada"),
                Part::Text("role", "Treasurer"),
                Part::File("photo", "ada.png", b"second"),
            ],
        ),
    )
    .await;
    assert_eq!(updated["departments"], json!([]));
    assert_eq!(blobs.deletes(), vec![first_photo]);
    assert_eq!(blobs.uploads().len(), 2);

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/members/{member_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(blobs.deletes().len(), 2);
}

#[actix_web::test]
async fn placeholder_photos_never_reach_the_blob_store() {
    let blobs = Arc::new(RecordingBlobStore::default());
    let app = test::init_service(app(state(Default::default(), blobs.clone()))).await;

    let created: Value = test::call_and_read_body_json(
        &app,
        form_request(
            "POST",
            "/api/blogs",
            &[
                Part::Text("title", "Launch"),
                Part::Text("author", "Grace"),
                Part::Text("body", "We launched."),
            ],
        ),
    )
    .await;
    assert_eq!(created["cover_image_uri"], PLACEHOLDER_PHOTO_URL);

    let blog_id = created["id"].as_i64().expect("blog id");
    let deleted = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/blogs/{blog_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert!(blobs.uploads().is_empty());
    assert!(blobs.deletes().is_empty());
}

#[actix_web::test]
async fn blog_cover_replacement_keeps_text() {
    let blobs = Arc::new(RecordingBlobStore::default());
    let app = test::init_service(app(state(Default::default(), blobs.clone()))).await;

    let created: Value = test::call_and_read_body_json(
        &app,
        form_request(
            "POST",
            "/api/blogs",
            &[
                Part::Text("title", "Launch"),
                Part::Text("author", "Grace"),
                Part::Text("body", "We launched."),
            ],
        ),
    )
    .await;
    let blog_id = created["id"].as_i64().expect("blog id");

    let covered: Value = test::call_and_read_body_json(
        &app,
        form_request(
            "PUT",
            &format!("/api/blogs/{blog_id}/cover"),
            &[Part::File("photo", "cover.jpg", b"jpeg")],
        ),
    )
    .await;
    assert!(
        covered["cover_image_uri"]
            .as_str()
            .is_some_and(|uri| uri.starts_with("https://blob.test/blog_images/"))
    );
    assert_eq!(covered["body"], "We launched.");
    assert!(blobs.deletes().is_empty());
}
