//! Repository layer: one repo per table, static async methods over a
//! `PgPool`.

pub mod advisor_repo;
pub mod blog_repo;
pub mod contact_info_repo;
pub mod course_content_repo;
pub mod course_repo;
pub mod curriculum_repo;
pub mod hero_repo;
pub mod internship_repo;
pub mod lead_repo;
pub mod placements_repo;
pub mod project_repo;

pub use advisor_repo::AdvisorRepo;
pub use blog_repo::BlogPostRepo;
pub use contact_info_repo::ContactInformationRepo;
pub use course_content_repo::{
    CourseCareerOpportunityRepo, CourseCertificationPointRepo, CourseFaqRepo,
    CourseHighlightRepo, CourseLearningOutcomeRepo, CourseToolRepo,
};
pub use course_repo::CourseRepo;
pub use curriculum_repo::{CurriculumMonthRepo, CurriculumSectionRepo, CurriculumTopicRepo};
pub use hero_repo::HeroSlideRepo;
pub use internship_repo::{InternshipBenefitRepo, InternshipSectionRepo};
pub use lead_repo::{ContactMessageRepo, EnquiryRepo, EnrollmentRepo};
pub use placements_repo::{CompanyLogoRepo, ManyMoreCompaniesRepo, PlacementsSectionRepo};
pub use project_repo::{ProjectCardRepo, ProjectDetailRepo};
