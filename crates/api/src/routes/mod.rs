pub mod blog;
pub mod courses;
pub mod curriculum;
pub mod health;
pub mod internship;
pub mod leads;
pub mod placements;
pub mod projects;
pub mod site;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /courses                                          list (public)
/// /courses/{course_url}                             course detail page
///
/// /projects                                         list (public)
/// /projects/{slug}                                  project page (card + detail)
///
/// /blog                                             published posts
/// /blog/{slug}                                      blog post page
///
/// /hero-slides                                      active slides
/// /advisors                                         active advisors (highlighted bios)
/// /placements                                       active sections with logos
/// /internship                                       active section with benefits
/// /contact-info                                     contact information block
///
/// /contact                                          contact form (POST)
/// /enroll                                           enrollment form (POST)
/// /enquiry                                          enquiry form (POST)
///
/// /admin/courses                                    list, create
/// /admin/courses/{id}                               get, update, delete
/// /admin/courses/{course_id}/highlights             list, create
/// /admin/courses/{course_id}/highlights/{id}        update, delete
/// /admin/courses/{course_id}/learning-outcomes      list, create (+ /{id})
/// /admin/courses/{course_id}/tools                  list, create (+ /{id})
/// /admin/courses/{course_id}/certification-points   list, create (+ /{id})
/// /admin/courses/{course_id}/faqs                   list, create (+ /{id})
/// /admin/courses/{course_id}/career-opportunities   list, create (+ /{id})
/// /admin/courses/{course_id}/curriculum/months      list, create
///
/// /admin/curriculum/months/{id}                     update, delete
/// /admin/curriculum/months/{month_id}/sections      list, create
/// /admin/curriculum/sections/{id}                   update, delete
/// /admin/curriculum/sections/{section_id}/topics    list, create
/// /admin/curriculum/topics/{id}                     update, delete
///
/// /admin/projects                                   list, create
/// /admin/projects/{id}                              get, update, delete
/// /admin/projects/{id}/detail                       get, replace (PUT), delete
///
/// /admin/blog                                       list, create
/// /admin/blog/{id}                                  get, update, delete
///
/// /admin/hero-slides                                list, create (+ /{id})
/// /admin/advisors                                   list, create (+ /{id})
///
/// /admin/placements                                 list, create (+ /{id})
/// /admin/placements/{section_id}/logos              list, create (+ /{id})
/// /admin/placements/{section_id}/many-more          get, upsert (PUT), delete
///
/// /admin/internship                                 get, create (singleton)
/// /admin/internship/{id}                            update, delete
/// /admin/internship/{section_id}/benefits           list, create (+ /{id})
///
/// /admin/contact-info                               upsert (PUT)
///
/// /admin/leads/contact-messages                     list
/// /admin/leads/enrollments                          list
/// /admin/leads/enquiries                            list
///
/// /admin/uploads                                    upload media (POST, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public content endpoints.
        .nest("/courses", courses::public_router())
        .nest("/projects", projects::public_router())
        .nest("/blog", blog::public_router())
        .nest("/hero-slides", site::hero_public_router())
        .nest("/advisors", site::advisors_public_router())
        .nest("/placements", placements::public_router())
        .nest("/internship", internship::public_router())
        .nest("/contact-info", site::contact_info_public_router())
        // Public lead-capture forms.
        .merge(leads::public_router())
        // Admin management endpoints.
        .nest("/admin/courses", courses::admin_router())
        .nest("/admin/curriculum", curriculum::admin_router())
        .nest("/admin/projects", projects::admin_router())
        .nest("/admin/blog", blog::admin_router())
        .nest("/admin/hero-slides", site::hero_admin_router())
        .nest("/admin/advisors", site::advisors_admin_router())
        .nest("/admin/placements", placements::admin_router())
        .nest("/admin/internship", internship::admin_router())
        .nest("/admin/contact-info", site::contact_info_admin_router())
        .nest("/admin/leads", leads::admin_router())
        .nest("/admin/uploads", uploads::admin_router())
}
