//! User-facing strings. Every failure reaches the user as exactly one of these.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
	#[default]
	En,
	Id,
}
impl Locale {
	/// Parses a config locale code; unknown codes fall back to English.
	pub fn from_code(code: &str) -> Self {
		match code.trim().to_ascii_lowercase().as_str() {
			"id" => Self::Id,
			_ => Self::En,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
	TokenFailed,
	TokenSaveFailed,
	LoadFailed,
	EmptyFields,
	SaveFailed,
	DeleteFailed,
	LogoutFailed,
	AuthRejected,
	AuthFailed,
	MissingAuthFields,
	NotSignedIn,
	UnknownNote,
	NoNotes,
	Created,
	Updated,
	Deleted,
	SignedIn,
	Registered,
	SignedOut,
}
impl Message {
	pub fn text(self, locale: Locale) -> &'static str {
		match locale {
			Locale::En => self.en(),
			Locale::Id => self.id(),
		}
	}

	fn en(self) -> &'static str {
		match self {
			Self::TokenFailed => "Failed to get a session token. Please try again.",
			Self::TokenSaveFailed => "Logged in, but the login token could not be saved.",
			Self::LoadFailed => "Failed to load notes. Please try again.",
			Self::EmptyFields => "Title and content must not be empty.",
			Self::SaveFailed => "Failed to save the note. Please try again.",
			Self::DeleteFailed => "Failed to delete the note. Please try again.",
			Self::LogoutFailed => "Failed to log out. Please try again.",
			Self::AuthRejected => "Authentication failed.",
			Self::AuthFailed => "Could not authenticate. Check your details and try again.",
			Self::MissingAuthFields => "Username and password are required.",
			Self::NotSignedIn => "You are not logged in. Run `notes login` first.",
			Self::UnknownNote => "No note with that id.",
			Self::NoNotes => "No notes yet.",
			Self::Created => "Note added.",
			Self::Updated => "Note updated.",
			Self::Deleted => "Note deleted.",
			Self::SignedIn => "Logged in.",
			Self::Registered => "Account created.",
			Self::SignedOut => "Logged out.",
		}
	}

	fn id(self) -> &'static str {
		match self {
			Self::TokenFailed => "Gagal mengambil token. Silakan coba lagi.",
			Self::TokenSaveFailed => "Berhasil login, tetapi token tidak dapat disimpan.",
			Self::LoadFailed => "Gagal mengambil catatan. Silakan coba lagi.",
			Self::EmptyFields => "Judul dan konten tidak boleh kosong.",
			Self::SaveFailed => "Gagal menyimpan catatan. Silakan coba lagi.",
			Self::DeleteFailed => "Gagal menghapus catatan. Silakan coba lagi.",
			Self::LogoutFailed => "Gagal logout. Silakan coba lagi.",
			Self::AuthRejected => "Terjadi kesalahan autentikasi",
			Self::AuthFailed => "Gagal melakukan autentikasi. Cek kembali data Anda.",
			Self::MissingAuthFields => "Username dan password wajib diisi.",
			Self::NotSignedIn => "Anda belum login. Jalankan `notes login` terlebih dahulu.",
			Self::UnknownNote => "Catatan tidak ditemukan.",
			Self::NoNotes => "Belum ada catatan.",
			Self::Created => "Catatan ditambahkan.",
			Self::Updated => "Catatan diperbarui.",
			Self::Deleted => "Catatan dihapus.",
			Self::SignedIn => "Berhasil login.",
			Self::Registered => "Akun berhasil dibuat.",
			Self::SignedOut => "Berhasil logout.",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_locale_code_falls_back_to_english() {
		assert_eq!(Locale::from_code("fr"), Locale::En);
		assert_eq!(Locale::from_code(" ID "), Locale::Id);
	}
}
