//! Interactive admin session
//!
//! Drives an `Editor` working copy over stdin. Mutations touch only the
//! working copy; `save` commits it to the store, `reset` restores the
//! defaults, and quitting without `save` discards everything since the last
//! commit, deletes included.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::content::{BlogPost, Category, ContentStore, PortfolioImage, Review, Service};
use crate::editor::Editor;
use crate::Studio;

const HELP: &str = "\
Команды:
  list    services|reviews|posts|portfolio   показать список
  add     service|review|post|image          добавить (поля по очереди)
  edit    service|review|post|image <id>     изменить запись
  delete  service|review|post|image <id>     удалить из рабочей копии
  set     <поле> <значение>                  изменить hero/about/contacts
          (hero.badge, hero.title, hero.subtitle, about.description,
           about.years, about.shoots, about.satisfaction,
           contacts.address, contacts.phone, contacts.email, contacts.hours)
  save                                       записать изменения
  reset                                      сбросить всё к начальным настройкам
  quit                                       выйти
";

/// Run the admin session against the studio's file store
pub fn run(studio: &Studio) -> Result<()> {
    let mut editor = Editor::new(studio.store());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut editor, stdin.lock(), stdout.lock())
}

/// The session loop, generic over I/O so tests can script it
pub fn run_session<S, R, W>(editor: &mut Editor<S>, mut input: R, mut out: W) -> Result<()>
where
    S: ContentStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Панель управления. Введите help для списка команд.")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = match read_line(&mut input)? {
            Some(line) => line,
            None => break, // EOF quits without saving
        };
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word,
            None => continue,
        };

        match command {
            "help" | "?" => write!(out, "{}", HELP)?,

            "list" => list(editor, words.next().unwrap_or("services"), &mut out)?,

            "add" => match words.next() {
                Some(kind) => upsert(editor, kind, "", &mut input, &mut out)?,
                None => writeln!(out, "Что добавить? add service|review|post|image")?,
            },

            "edit" => match (words.next(), words.next()) {
                (Some(kind), Some(id)) => upsert(editor, kind, id, &mut input, &mut out)?,
                _ => writeln!(out, "Использование: edit service|review|post|image <id>")?,
            },

            "delete" => match (words.next(), words.next()) {
                (Some(kind), Some(id)) => delete(editor, kind, id, &mut out)?,
                _ => writeln!(out, "Использование: delete service|review|post|image <id>")?,
            },

            "set" => {
                let path = words.next().unwrap_or("");
                let value = line
                    .splitn(3, char::is_whitespace)
                    .nth(2)
                    .unwrap_or("")
                    .trim()
                    .to_string();
                set_field(editor, path, value, &mut out)?;
            }

            "save" => {
                editor.commit()?;
                writeln!(out, "Изменения сохранены!")?;
            }

            "reset" => {
                if confirm(
                    &mut input,
                    &mut out,
                    "Сбросить все изменения к начальным настройкам?",
                )? {
                    editor.reset()?;
                    writeln!(out, "Настройки сброшены")?;
                }
            }

            "quit" | "exit" => {
                if editor.is_dirty()
                    && !confirm(
                        &mut input,
                        &mut out,
                        "Есть несохранённые изменения, выйти без сохранения?",
                    )?
                {
                    continue;
                }
                break;
            }

            other => writeln!(out, "Неизвестная команда: {} (help для справки)", other)?,
        }
    }

    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_string()))
}

fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    write!(out, "{} (y/N): ", question)?;
    out.flush()?;
    Ok(matches!(
        read_line(input)?.as_deref().map(str::trim),
        Some("y") | Some("Y")
    ))
}

/// Prompt for one field; empty input keeps the current value
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    current: &str,
) -> Result<String> {
    if current.is_empty() {
        write!(out, "  {}: ", label)?;
    } else {
        write!(out, "  {} [{}]: ", label, current)?;
    }
    out.flush()?;
    let line = read_line(input)?.unwrap_or_default();
    let line = line.trim();
    Ok(if line.is_empty() {
        current.to_string()
    } else {
        line.to_string()
    })
}

fn list<S: ContentStore, W: Write>(editor: &Editor<S>, kind: &str, out: &mut W) -> Result<()> {
    let content = editor.content();
    match kind {
        "services" | "service" => {
            writeln!(out, "Услуги ({}):", content.services.len())?;
            for s in &content.services {
                writeln!(out, "  {} - {} ({}, {})", s.id, s.title, s.price, s.duration)?;
            }
        }
        "reviews" | "review" => {
            writeln!(out, "Отзывы ({}):", content.reviews.len())?;
            for r in &content.reviews {
                writeln!(out, "  {} - {} [{}/5]", r.id, r.name, r.rating)?;
            }
        }
        "posts" | "post" | "blog" => {
            writeln!(out, "Статьи ({}):", content.blog_posts.len())?;
            for p in &content.blog_posts {
                writeln!(out, "  {} - {} ({})", p.id, p.title, p.date)?;
            }
        }
        "portfolio" | "images" | "image" => {
            writeln!(out, "Портфолио ({}):", content.portfolio_images.len())?;
            for i in &content.portfolio_images {
                writeln!(out, "  {} - {} [{}]", i.id, i.title, i.category)?;
            }
        }
        other => writeln!(out, "Неизвестный список: {}", other)?,
    }
    Ok(())
}

fn upsert<S, R, W>(editor: &mut Editor<S>, kind: &str, id: &str, input: &mut R, out: &mut W) -> Result<()>
where
    S: ContentStore,
    R: BufRead,
    W: Write,
{
    match kind {
        "service" => {
            let current = find_or_default(editor.content().services.iter(), |s| &s.id, id, out)?;
            let Some(current) = current else { return Ok(()) };
            let item = Service {
                id: current.id.clone(),
                title: prompt(input, out, "Название", &current.title)?,
                price: prompt(input, out, "Цена", &current.price)?,
                duration: prompt(input, out, "Длительность", &current.duration)?,
                description: prompt(input, out, "Описание", &current.description)?,
                icon: prompt(input, out, "Иконка", &current.icon)?,
            };
            editor.upsert_service(item);
            writeln!(out, "Услуга сохранена")?;
        }
        "review" => {
            let current = find_or_default(editor.content().reviews.iter(), |r| &r.id, id, out)?;
            let Some(current) = current else { return Ok(()) };
            let name = prompt(input, out, "Имя", &current.name)?;
            let text = prompt(input, out, "Текст", &current.text)?;
            let rating = prompt(input, out, "Рейтинг (1-5)", &current.rating.to_string())?;
            let item = Review {
                id: current.id.clone(),
                name,
                text,
                rating: rating.parse().unwrap_or(current.rating),
            };
            editor.upsert_review(item);
            writeln!(out, "Отзыв сохранён")?;
        }
        "post" => {
            let current = find_or_default(editor.content().blog_posts.iter(), |p| &p.id, id, out)?;
            let Some(current) = current else { return Ok(()) };
            let item = BlogPost {
                id: current.id.clone(),
                title: prompt(input, out, "Заголовок", &current.title)?,
                date: prompt(input, out, "Дата", &current.date)?,
                excerpt: prompt(input, out, "Анонс", &current.excerpt)?,
                image: prompt(input, out, "Изображение (URL)", &current.image)?,
            };
            editor.upsert_blog_post(item);
            writeln!(out, "Статья сохранена")?;
        }
        "image" => {
            let current =
                find_or_default(editor.content().portfolio_images.iter(), |i| &i.id, id, out)?;
            let Some(current) = current else { return Ok(()) };
            let url = prompt(input, out, "URL", &current.url)?;
            let category = loop {
                let raw = prompt(input, out, "Категория", current.category.as_str())?;
                match raw.parse::<Category>() {
                    Ok(cat) => break cat,
                    Err(e) => writeln!(out, "  {}", e)?,
                }
            };
            let title = prompt(input, out, "Название", &current.title)?;
            let item = PortfolioImage {
                id: current.id.clone(),
                url,
                category,
                title,
            };
            editor.upsert_portfolio_image(item);
            writeln!(out, "Изображение сохранено")?;
        }
        other => writeln!(out, "Неизвестный тип: {}", other)?,
    }
    Ok(())
}

/// Resolve the item being edited: the matching entry for a non-empty id, a
/// blank one for an add. An unknown id during `edit` is reported, not
/// silently turned into a create.
fn find_or_default<'a, T, I, W>(
    mut items: I,
    id_of: impl Fn(&T) -> &String,
    id: &str,
    out: &mut W,
) -> Result<Option<T>>
where
    T: Clone + Default,
    I: Iterator<Item = &'a T>,
    T: 'a,
    W: Write,
{
    if id.is_empty() {
        return Ok(Some(T::default()));
    }
    match items.find(|item| id_of(item).as_str() == id) {
        Some(item) => Ok(Some(item.clone())),
        None => {
            writeln!(out, "Запись не найдена: {}", id)?;
            Ok(None)
        }
    }
}

fn delete<S: ContentStore, W: Write>(
    editor: &mut Editor<S>,
    kind: &str,
    id: &str,
    out: &mut W,
) -> Result<()> {
    let (removed, message) = match kind {
        "service" => (editor.delete_service(id), "Услуга удалена"),
        "review" => (editor.delete_review(id), "Отзыв удалён"),
        "post" => (editor.delete_blog_post(id), "Статья удалена"),
        "image" => (editor.delete_portfolio_image(id), "Изображение удалено"),
        other => {
            writeln!(out, "Неизвестный тип: {}", other)?;
            return Ok(());
        }
    };
    if removed {
        writeln!(out, "{}", message)?;
    } else {
        writeln!(out, "Запись не найдена: {}", id)?;
    }
    Ok(())
}

fn set_field<S: ContentStore, W: Write>(
    editor: &mut Editor<S>,
    path: &str,
    value: String,
    out: &mut W,
) -> Result<()> {
    match path {
        "hero.badge" => editor.hero_mut().badge = value,
        "hero.title" => editor.hero_mut().title = value,
        "hero.subtitle" => editor.hero_mut().subtitle = value,
        "about.description" => editor.about_mut().description = value,
        "about.years" => editor.about_mut().stats.years = value,
        "about.shoots" => editor.about_mut().stats.shoots = value,
        "about.satisfaction" => editor.about_mut().stats.satisfaction = value,
        "contacts.address" => editor.contacts_mut().address = value,
        "contacts.phone" => editor.contacts_mut().phone = value,
        "contacts.email" => editor.contacts_mut().email = value,
        "contacts.hours" => editor.contacts_mut().hours = value,
        other => {
            writeln!(out, "Неизвестное поле: {} (help для списка)", other)?;
            return Ok(());
        }
    }
    writeln!(out, "Поле обновлено (не забудьте save)")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryStore;
    use std::io::Cursor;

    fn run_script<S: ContentStore>(editor: &mut Editor<S>, script: &str) -> String {
        let mut out = Vec::new();
        run_session(editor, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_service_and_save_persists_five_services() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        let script = "add service\nVideo\n10000\n2h\nx\nCamera\nsave\nquit\n";
        let out = run_script(&mut editor, script);
        assert!(out.contains("Услуга сохранена"));
        assert!(out.contains("Изменения сохранены!"));

        let persisted = store.load();
        assert_eq!(persisted.services.len(), 5);
        assert_eq!(persisted.services.last().unwrap().title, "Video");
    }

    #[test]
    fn delete_without_save_is_discarded() {
        let store = MemoryStore::new();
        let id = store.load().services[0].id.clone();
        {
            let mut editor = Editor::new(&store);
            // quit answers "y" to the unsaved-changes prompt
            let script = format!("delete service {}\nquit\ny\n", id);
            let out = run_script(&mut editor, &script);
            assert!(out.contains("Услуга удалена"));
        }
        assert_eq!(store.load().services.len(), 4);
    }

    #[test]
    fn delete_then_save_persists() {
        let store = MemoryStore::new();
        let id = store.load().services[0].id.clone();
        let mut editor = Editor::new(&store);
        run_script(&mut editor, &format!("delete service {}\nsave\nquit\n", id));
        assert_eq!(store.load().services.len(), 3);
    }

    #[test]
    fn set_hero_title_updates_working_copy() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        run_script(&mut editor, "set hero.title Новый заголовок\nsave\nquit\n");
        assert_eq!(store.load().hero.title, "Новый заголовок");
    }

    #[test]
    fn reset_requires_confirmation() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        run_script(
            &mut editor,
            "set hero.badge Изменено\nsave\nreset\nn\nquit\n",
        );
        assert_eq!(store.load().hero.badge, "Изменено");

        let mut editor = Editor::new(&store);
        run_script(&mut editor, "reset\ny\nquit\n");
        assert_eq!(store.load(), crate::content::default_content());
    }

    #[test]
    fn edit_with_unknown_id_reports_not_found() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        let out = run_script(&mut editor, "edit service nope\nquit\n");
        assert!(out.contains("Запись не найдена: nope"));
        assert_eq!(editor.content().services.len(), 4);
    }

    #[test]
    fn image_category_must_be_known() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        let script = "add image\nhttps://example.com/a.jpg\nlandscape\nwedding\nНовая\nsave\nquit\n";
        let out = run_script(&mut editor, script);
        assert!(out.contains("unknown category"));

        let persisted = store.load();
        let added = persisted.portfolio_images.last().unwrap();
        assert_eq!(added.category, Category::Wedding);
        assert_eq!(added.title, "Новая");
    }
}
