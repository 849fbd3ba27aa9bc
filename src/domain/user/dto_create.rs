/// Fixed-shape record handed to the repository on create.
///
/// Built from whatever input the caller has through a `From` impl; only
/// these five fields survive the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserDto {
    pub email: String,
    pub name: String,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub zip_code: String,
}
