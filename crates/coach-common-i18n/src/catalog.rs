// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static catalog of interface strings.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::locale::Lang;

/// One catalog entry. An empty translation falls back to English.
struct Entry {
	en: &'static str,
	fr: &'static str,
	ar: &'static str,
}

impl Entry {
	fn get(&self, lang: Lang) -> &'static str {
		let value = match lang {
			Lang::En => self.en,
			Lang::Fr => self.fr,
			Lang::Ar => self.ar,
		};
		if value.is_empty() {
			self.en
		} else {
			value
		}
	}
}

macro_rules! entries {
	($($key:literal => [$en:literal, $fr:literal, $ar:literal]),* $(,)?) => {
		HashMap::from([
			$(($key, Entry { en: $en, fr: $fr, ar: $ar }),)*
		])
	};
}

static CATALOG: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
	entries! {
		"client.common.loading" => ["Loading...", "Chargement...", "جاري التحميل..."],
		"client.login.title" => ["Login", "Connexion", "تسجيل الدخول"],
		"client.login.email" => ["Email", "Email", "البريد الإلكتروني"],
		"client.login.password" => ["Password", "Mot de passe", "كلمة المرور"],
		"client.login.success" => ["Logged in as {email}", "Connecté en tant que {email}", "تم تسجيل الدخول باسم {email}"],
		"client.signup.title" => ["Create Your Account", "Créez votre compte", "أنشئ حسابك"],
		"client.signup.success" => ["Account created for {email}", "Compte créé pour {email}", "تم إنشاء الحساب لـ {email}"],
		"client.auth.logged_out" => ["Logged out", "Déconnecté", "تم تسجيل الخروج"],
		"client.auth.login_required" => ["Please log in first.", "Veuillez d'abord vous connecter.", "يرجى تسجيل الدخول أولاً."],
		"client.auth.redirect" => ["Continue at {location}", "Continuez sur {location}", "تابع على {location}"],
		"client.error.invalid_credentials" => ["Invalid credentials", "Identifiants invalides", "بيانات الاعتماد غير صالحة"],
		"client.error.network" => ["Network error. Please try again.", "Erreur réseau. Veuillez réessayer.", "خطأ في الشبكة. حاول مرة أخرى."],
		"client.error.generic" => ["Something went wrong. Please try again.", "Une erreur est survenue. Veuillez réessayer.", "حدث خطأ. حاول مرة أخرى."],
		"client.exercises.title" => ["Exercise Library", "Bibliothèque d'exercices", "مكتبة التمارين"],
		"client.exercises.empty" => ["No exercises found", "Aucun exercice trouvé", "لم يتم العثور على تمارين"],
		"client.exercises.not_found" => ["Exercise not found", "Exercice introuvable", "التمرين غير موجود"],
		"client.exercises.instructions" => ["Instructions", "Instructions", "التعليمات"],
		"client.exercises.demo_video" => ["Watch Demo Video", "Voir la vidéo", "عرض فيديو توضيحي"],
		"client.programs.title" => ["Pre-Built Workout Plans", "Programmes prêts à l'emploi", "خطط التمرين الجاهزة"],
		"client.programs.empty" => ["No workout plans available", "Aucun programme disponible", "لا توجد خطط تمرين"],
		"client.programs.not_found" => ["Program not found", "Programme introuvable", "الخطة غير موجودة"],
		"client.programs.weeks" => ["{weeks} weeks", "{weeks} semaines", "{weeks} أسابيع"],
		"client.programs.day" => ["Day {day}", "Jour {day}", "اليوم {day}"],
		"client.programs.set_rep" => ["{sets} x {reps}", "{sets} x {reps}", "{sets} × {reps}"],
		"client.plan.added" => ["Plan added to your account!", "Programme ajouté à votre compte !", "تمت إضافة الخطة إلى حسابك!"],
		"client.plan.exercise_added" => ["Added to your plan!", "Ajouté à votre programme !", "تمت الإضافة إلى خطتك!"],
		"client.plan.add_failed" => ["Failed to add plan: {error}", "Échec de l'ajout : {error}", "فشل في الإضافة: {error}"],
		"client.dashboard.welcome" => ["Welcome to Your Dashboard!", "Bienvenue sur votre tableau de bord !", "مرحباً بك في لوحة التحكم!"],
		"client.dashboard.greeting" => ["Hi, {name}!", "Bonjour, {name} !", "مرحباً، {name}!"],
		"client.dashboard.role" => ["Role:", "Rôle :", "الدور:"],
	}
});

/// Translate an interface string.
///
/// Unknown keys are returned verbatim so a missing entry is visible rather
/// than blank.
pub fn t(lang: Lang, key: &str) -> String {
	match CATALOG.get(key) {
		Some(entry) => entry.get(lang).to_string(),
		None => {
			tracing::debug!(key, "missing catalog entry");
			key.to_string()
		}
	}
}

/// Translate an interface string and substitute `{name}` placeholders.
pub fn t_fmt(lang: Lang, key: &str, args: &[(&str, &str)]) -> String {
	args.iter().fold(t(lang, key), |acc, (name, value)| {
		acc.replace(&format!("{{{name}}}"), value)
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_translates_each_language() {
		assert_eq!(t(Lang::En, "client.login.title"), "Login");
		assert_eq!(t(Lang::Fr, "client.login.title"), "Connexion");
		assert_eq!(t(Lang::Ar, "client.login.title"), "تسجيل الدخول");
	}

	#[test]
	fn test_unknown_key_is_returned() {
		assert_eq!(t(Lang::Fr, "client.nope"), "client.nope");
	}

	#[test]
	fn test_every_entry_has_english() {
		for entry in CATALOG.values() {
			assert!(!entry.en.is_empty());
		}
	}

	#[test]
	fn test_t_fmt_substitutes() {
		assert_eq!(
			t_fmt(Lang::En, "client.dashboard.greeting", &[("name", "Sam")]),
			"Hi, Sam!"
		);
		assert_eq!(
			t_fmt(Lang::Fr, "client.programs.weeks", &[("weeks", "4")]),
			"4 semaines"
		);
	}

	#[test]
	fn test_t_fmt_leaves_unknown_placeholders() {
		assert_eq!(
			t_fmt(Lang::En, "client.dashboard.greeting", &[("other", "x")]),
			"Hi, {name}!"
		);
	}
}
