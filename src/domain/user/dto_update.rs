/// Partial update. `None` leaves the stored value untouched; for the
/// optional columns `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<Option<i32>>,
    pub city: Option<Option<String>>,
    pub zip_code: Option<String>,
}

impl UpdateUserDto {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.age.is_none()
            && self.city.is_none()
            && self.zip_code.is_none()
    }
}
