use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::accounts::model::{Account, Role};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, SignupRequest, TokenResponse};
use crate::modules::courses::model::{
    AddCourseContentDto, Course, CourseContent, CreateCourseDto, DeleteCourseDto,
};
use crate::modules::purchases::model::{Purchase, PurchaseCourseDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::signup_admin,
        crate::modules::auth::controller::login_admin,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::add_course_content,
        crate::modules::courses::controller::list_courses,
        crate::modules::purchases::controller::purchase_course,
        crate::modules::purchases::controller::list_purchased_courses,
    ),
    components(
        schemas(
            Account,
            Role,
            SignupRequest,
            LoginRequest,
            TokenResponse,
            Course,
            CreateCourseDto,
            DeleteCourseDto,
            CourseContent,
            AddCourseContentDto,
            Purchase,
            PurchaseCourseDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and login for users and admins"),
        (name = "Courses", description = "Course catalog and admin course management"),
        (name = "Purchases", description = "Course purchases")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
